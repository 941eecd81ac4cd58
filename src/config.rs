use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, InvalidInputError};
use crate::households::Households;
use crate::matcher::Matcher;

pub const DEFAULT_SEED: u64 = 2020;

fn default_seed() -> u64 {
    DEFAULT_SEED
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub households: Vec<Vec<String>>,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl MatchConfig {
    pub fn new(households: Vec<Vec<String>>, seed: u64) -> Self {
        MatchConfig { households, seed }
    }
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
    pub fn with_seed(self, seed: u64) -> Self {
        MatchConfig { seed, ..self }
    }
    pub fn matcher(&self) -> Result<Matcher<String>, InvalidInputError> {
        let households = Households::new(self.households.clone())?;
        Ok(Matcher::new(households, self.seed))
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        let households: Vec<Vec<String>> = [
            &["Jeanne", "Bill"][..],
            &["Laura", "Joe"],
            &["Doug"],
            &["Grandma", "Grandpa"],
        ]
        .iter()
        .map(|household| household.iter().map(|name| name.to_string()).collect::<Vec<_>>())
        .collect();
        MatchConfig::new(households, DEFAULT_SEED)
    }
}
