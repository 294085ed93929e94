use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDR: &str = "BIND_ADDR";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const BIND_ADDR: &str = "0.0.0.0";
    /// Page size applied when the client omits `limit`.
    pub const PAGE_LIMIT: i64 = 10;
    /// Upper bound for the `limit` query parameter.
    pub const MAX_PAGE_LIMIT: i64 = 100;
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var(env_vars::PORT)
                .unwrap_or_else(|_| defaults::PORT.to_string())
                .parse()
                .expect("PORT must be a valid number"),
            bind_addr: env::var(env_vars::BIND_ADDR)
                .unwrap_or_else(|_| defaults::BIND_ADDR.to_string()),
        }
    }
}
