use crate::error::Result;
use crate::model::MetricPoint;

pub trait Encoder {
    fn encode(&self, point: &MetricPoint) -> Result<Vec<u8>>;
}
