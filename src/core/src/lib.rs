pub mod club;
pub mod r#match;

pub mod utils;

pub use club::{
    // Player exports
    Player, PlayerSkills, PlayerPositionType, PlayerFieldPositionGroup,
    PlayerPowerCalculator, PowerWeights,
    // Roster exports
    Roster, RosterEntry, RosterError, DEFAULT_SKILL_VALUE, MAX_GOALKEEPERS,
    // Team exports
    TeamAssignment, TeamSide, TeamTactic,
};

pub use r#match::squad::{
    FieldOrientation, FormationLayout, PlayerMarker, TeamAnalyzer, TeamBalancer, TeamStats,
};

pub use utils::*;
