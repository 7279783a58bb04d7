mod point;
mod tag;
mod timestamp;

pub use point::*;
pub use tag::*;
pub use timestamp::*;

pub type MetricName = String;

pub type SampleValue = f64;
