mod random;
mod time;

pub use random::{shuffle, RandomSource};
pub use time::TimeEstimation;

#[cfg(test)]
pub(crate) use random::ScriptedSource;
