mod error;
mod generators;
mod loaders;
mod match_size;

pub use error::{DatabaseError, MatchSizeError};
pub use generators::RosterGenerator;
use loaders::RosterDataLoader;
pub use match_size::{MatchSize, MAX_PLAYERS_PER_SIDE};

use log::debug;

/// Static data behind roster generation.
#[derive(Debug, Clone)]
pub struct DatabaseEntity {
    pub names: Vec<String>,
    pub match_sizes: Vec<MatchSize>,
    pub default_match_size: MatchSize,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, DatabaseError> {
        let roster_data = RosterDataLoader::load()?;

        let match_sizes = roster_data
            .match_sizes
            .iter()
            .map(|code| code.parse::<MatchSize>())
            .collect::<Result<Vec<_>, _>>()?;

        let default_match_size = roster_data.default_match_size.parse::<MatchSize>()?;

        debug!(
            "roster data: {} names, {} match sizes",
            roster_data.names.len(),
            match_sizes.len()
        );

        Ok(DatabaseEntity {
            names: roster_data.names,
            match_sizes,
            default_match_size,
        })
    }
}
