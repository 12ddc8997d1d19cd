use std::fmt;
pub type Res<T> = Result<T, Error>;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    DegenerateInput,
    InvalidArgument,
    IOError,
    ConfigError(String),
}

impl From<std::io::Error> for Error {
    fn from(_: std::io::Error) -> Self {
        Error::IOError
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateInput => write!(f, "Ciphertext needs at least 2 letters"),
            Error::InvalidArgument => write!(f, "Invalid argument supplied.."),
            Error::IOError => write!(f, "IO Error has occurred"),
            Error::ConfigError(reason) => write!(f, "Bad configuration: {}", reason),
        }
    }
}

impl std::error::Error for Error {}
