mod roster;

pub use roster::RosterGenerator;
