use std::env;

use thiserror::Error;

/// Environment variables checked for the GitHub token, in priority order.
pub const GITHUB_TOKEN_VARS: [&str; 2] = ["HUBOT_GITHUB_TOKEN", "GITHUB_TOKEN"];

pub const DISCORD_TOKEN_VAR: &str = "DISCORD_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Expected {0} in environment")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub github_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = non_empty(lookup(DISCORD_TOKEN_VAR))
            .ok_or(ConfigError::MissingVar(DISCORD_TOKEN_VAR))?;

        Ok(Config {
            discord_token,
            github_token: resolve_github_token(&lookup),
        })
    }
}

/// First non-empty value among `GITHUB_TOKEN_VARS` wins.
pub fn resolve_github_token<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    GITHUB_TOKEN_VARS
        .iter()
        .find_map(|key| non_empty(lookup(key)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
