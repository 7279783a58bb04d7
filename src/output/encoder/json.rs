use super::encoder::Encoder;
use crate::error::Result;
use crate::model::MetricPoint;

// {"name":"sys.cpu.user","value":42.5,"timestamp":1609459200,"tags":[{"name":"host","value":"server01"}]}
pub struct JsonEncoder {}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, point: &MetricPoint) -> Result<Vec<u8>> {
        serde_json::to_vec(point).map_err(|e| ("JSON serialization failed", e).into())
    }
}
