pub mod assignment;
pub mod common;
pub mod config;
pub mod edge_set;
pub mod error;
pub mod feasibility;
pub mod households;
pub mod matcher;

pub use assignment::{Assignment, Coverage};
pub use common::{Edge, PersonId};
pub use config::{MatchConfig, DEFAULT_SEED};
pub use error::{parse_seed, ConfigError, InvalidInputError, InvalidSeedError, MatchError};
pub use feasibility::has_complete_assignment;
pub use households::Households;
pub use matcher::{assign_gifts, CompleteAssignment, Matcher};
