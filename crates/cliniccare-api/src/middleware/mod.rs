pub mod audit;
pub mod latency;
