mod counters;

pub use counters::*;
