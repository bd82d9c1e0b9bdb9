use crate::error::AppError;
use config::{Config as Cfg, Environment, File, Map};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Config {
    /// Load from an optional `configuration` file, then the process environment.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::default().ignore_empty(true).try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Load from an explicit set of variables instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Map<String, String> = vars.into_iter().collect();
        let config = Cfg::builder()
            .add_source(
                Environment::default()
                    .source(Some(vars))
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
