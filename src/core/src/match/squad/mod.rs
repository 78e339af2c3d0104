mod analyzer;
mod balancer;
mod layout;

pub use analyzer::{TeamAnalyzer, TeamStats};
pub use balancer::TeamBalancer;
pub use layout::{FieldOrientation, FormationLayout, PlayerMarker};
