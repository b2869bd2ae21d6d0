pub mod fan_sim;

pub use fan_sim::FanSim;
