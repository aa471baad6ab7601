use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("line {line}: invalid value `{token}` (expected a number)")]
    InvalidValue { line: usize, token: String },

    #[error("line {line}: non-finite value `{token}`")]
    NonFiniteValue { line: usize, token: String },

    #[error("no statistic named `{name}` in owner group `{owner_group}`")]
    StatNotFound { owner_group: String, name: String },

    #[error("no statistic named `{0}` in any owner group")]
    NameNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
