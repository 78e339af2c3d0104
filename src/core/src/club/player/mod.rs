pub mod calculators;
pub mod player;
pub mod position;
pub mod skills;

pub use calculators::{PlayerPowerCalculator, PowerWeights};
pub use player::Player;
pub use position::{PlayerFieldPositionGroup, PlayerPositionType};
pub use skills::PlayerSkills;
