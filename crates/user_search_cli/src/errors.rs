use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the user search CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading or parsing configuration.
    ///
    /// Returned when the configuration file is missing, unreadable, or
    /// contains invalid TOML.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A result could not be written to standard output.
    #[error("Failed to write output: {0}")]
    Output(String),

    /// The search library reported a failure.
    #[error(transparent)]
    Search(#[from] user_search::Error),
}

impl Error {
    /// Exit code reported to the shell for this error.
    ///
    /// Each failure kind gets its own code so scripts can react to them
    /// separately.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::Output(_) => 1,
            Error::Search(user_search::Error::Configuration(_)) => 1,
            Error::Search(user_search::Error::InvalidQuery(_)) => 2,
            Error::Search(user_search::Error::RateLimited { .. }) => 3,
            Error::Search(user_search::Error::Transport { .. }) => 4,
        }
    }

    /// A message suitable for showing to the person running the command.
    pub fn user_message(&self) -> String {
        match self {
            Error::Config(msg) => format!("Configuration problem: {msg}"),
            Error::Output(msg) => format!("Could not print the result: {msg}"),
            Error::Search(user_search::Error::Configuration(msg)) => {
                format!("Configuration problem: {msg}")
            }
            Error::Search(user_search::Error::InvalidQuery(msg)) => {
                format!("Check your query: {msg}")
            }
            Error::Search(user_search::Error::RateLimited {
                retry_after: Some(wait),
            }) => format!(
                "Rate limited by the directory API, try again in {} seconds",
                wait.as_secs()
            ),
            Error::Search(user_search::Error::RateLimited { retry_after: None }) => {
                "Rate limited by the directory API, try again later".to_string()
            }
            Error::Search(user_search::Error::Transport { .. }) => {
                "Failed to reach the directory API. Check your network connection.".to_string()
            }
        }
    }
}
