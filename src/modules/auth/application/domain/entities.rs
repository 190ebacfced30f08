use thiserror::Error;

/// Storage key of the persisted admin flag.
pub const LOGIN_FLAG_KEY: &str = "isLoggedIn";

pub const INCORRECT_PASSWORD_MESSAGE: &str = "Incorrect password.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("incorrect password")]
    IncorrectPassword,
}
