mod calculator;

pub use calculator::{PlayerPowerCalculator, PowerWeights};
