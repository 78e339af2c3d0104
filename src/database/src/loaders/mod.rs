mod roster;

pub use roster::RosterDataLoader;
