use std::env;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: &str = "27017";
const DEFAULT_DB_NAME: &str = "mydatabase";
const DEFAULT_JWT_SECRET: &str = "your_jwt_secret";
const DEFAULT_API_URL: &str = "http://localhost:3000/api";

// Database connection parameters. Nothing in the scaffold dials the database
// yet; the block is resolved so the values are in one place when something
// does.
#[allow(dead_code)]
pub struct DbConfig {
    pub host: String,
    pub port: String,
    pub name: String,
}

// Every field is kept verbatim as a string: a non-numeric PORT passes through
// resolution untouched and fails at bind time instead.
#[allow(dead_code)]
pub struct Config {
    pub port: String,
    pub db: DbConfig,
    pub jwt_secret: String,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", DEFAULT_PORT),
            db: DbConfig {
                host: env_or("DB_HOST", DEFAULT_DB_HOST),
                port: env_or("DB_PORT", DEFAULT_DB_PORT),
                name: env_or("DB_NAME", DEFAULT_DB_NAME),
            },
            jwt_secret: env_or("JWT_SECRET", DEFAULT_JWT_SECRET),
            api_url: env_or("API_URL", DEFAULT_API_URL),
        }
    }
}

// A variable set to the empty string counts as unset and falls back to the
// default.
fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
