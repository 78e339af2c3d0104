pub mod player;
pub mod roster;
pub mod team;

pub use player::{
    Player, PlayerSkills, PlayerPositionType, PlayerFieldPositionGroup,
    PlayerPowerCalculator, PowerWeights,
};

pub use roster::{Roster, RosterEntry, RosterError, DEFAULT_SKILL_VALUE, MAX_GOALKEEPERS};

pub use team::{TeamAssignment, TeamSide, TeamTactic};
