use thiserror::Error;

pub const TOKEN_VAR: &str = "TELOXIDE_TOKEN";
pub const DB_PATH_VAR: &str = "RHR_DB_PATH";
pub const DEFAULT_POLICY_VAR: &str = "RHR_DEFAULT_POLICY";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: String,
    /// Policy label applied to new sessions, e.g. "random" or "force".
    /// Labels a quiz does not offer fall back to random.
    pub default_policy: String,
}

impl Config {
    /// Reads `.env` (if any) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_err() {
            log::debug!("No .env file found, using the process environment");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // The token itself is read by `Bot::from_env`; only check it is there.
        match lookup(TOKEN_VAR) {
            None => return Err(ConfigError::Missing(TOKEN_VAR)),
            Some(token) if token.trim().is_empty() => {
                return Err(ConfigError::Empty { name: TOKEN_VAR })
            }
            Some(_) => {}
        }

        let db_path = non_empty(&lookup, DB_PATH_VAR)?.unwrap_or_else(|| "db.sqlite".to_string());
        let default_policy =
            non_empty(&lookup, DEFAULT_POLICY_VAR)?.unwrap_or_else(|| "random".to_string());

        Ok(Self {
            db_path,
            default_policy,
        })
    }
}

fn non_empty<F>(lookup: &F, name: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { name }),
        other => Ok(other.map(|v| v.trim().to_string())),
    }
}
