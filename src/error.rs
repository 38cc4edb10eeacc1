use std::fmt;

/// Errors that can occur while building a game from configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Canvas width was zero
    ZeroWidth,

    /// Canvas height was zero
    ZeroHeight,

    /// Config text was not valid JSON for `GameConfig`
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::ZeroWidth => write!(f, "Canvas width must be positive"),
            ConfigError::ZeroHeight => write!(f, "Canvas height must be positive"),
            ConfigError::Parse(err) => write!(f, "Invalid game config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
