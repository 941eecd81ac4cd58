use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("at least 2 households are required, got {0}")]
    TooFewHouseholds(usize),
    #[error("household {0} is empty")]
    EmptyHousehold(usize),
    #[error("{0} appears more than once")]
    DuplicatePerson(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid seed {input:?}: expected a non-negative integer (usage: household_gift_matcher [SEED])")]
pub struct InvalidSeedError {
    pub input: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error("at least one attempt is required")]
    ZeroAttempts,
    #[error("no complete assignment exists for these households")]
    Infeasible,
    #[error("no complete assignment found after {0} attempts")]
    AttemptsExhausted(usize),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn parse_seed(input: &str) -> Result<u64, InvalidSeedError> {
    input.trim().parse().map_err(|_| InvalidSeedError {
        input: input.to_owned(),
    })
}
