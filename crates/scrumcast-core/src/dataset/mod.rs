// Player dataset: record types and the CSV loader.

pub mod loader;
pub mod player;

pub use loader::{load_players, DatasetError};
pub use player::{ColumnValue, PlayerRecord, Position, RoundEntry, SkillCounters, Team};
