pub mod tactics;
pub mod team;

pub use tactics::TeamTactic;
pub use team::{TeamAssignment, TeamSide};
