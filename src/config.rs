use anyhow::Context;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        let _ = dotenv::dotenv();

        let database_url = dotenv::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let bind_addr = dotenv::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());

        Ok(Config { database_url, bind_addr })
    }
}
