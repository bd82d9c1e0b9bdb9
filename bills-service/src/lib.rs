//! Bills Service - household bill tracking for PariwarOS.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
