use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("Invalid pagination options: {0}")]
    InvalidOptions(String),
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Error::InvalidOptions(
            serde_json::to_string(&err).unwrap_or("Validation error".to_owned()),
        )
    }
}
