use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Animation trigger error: {0}")]
    Animation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
