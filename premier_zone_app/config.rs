use dotenvy::dotenv;
use std::{env, str::FromStr};

pub struct Config {
    pub http_port: u16,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let http_port = parse_or(env::var("PREMIER_ZONE_HTTP_PORT").ok(), 8080);
        let db_max_connections =
            parse_or(env::var("PREMIER_ZONE_DB_MAX_CONNECTIONS").ok(), 5).max(1);

        Self {
            http_port,
            db_max_connections,
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    match value {
        Some(val) => val.trim().parse::<T>().unwrap_or(default),
        None => default,
    }
}
