use super::encoder::Encoder;
use crate::error::Result;
use crate::model::{MetricPoint, TimestampTrait};

pub struct HumanReadableEncoder {}

impl HumanReadableEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Encoder for HumanReadableEncoder {
    fn encode(&self, point: &MetricPoint) -> Result<Vec<u8>> {
        let tags: Vec<String> = point.tags.iter().map(|t| t.to_string()).collect();

        let line = format!(
            "{}\t{}\t{}\t{}",
            point.timestamp.to_string_secs(),
            point.name,
            point.value,
            tags.join(" "),
        );
        Ok(line.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;

    #[test]
    fn test_encode() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let point = MetricPoint {
            name: "sys.cpu.user".into(),
            value: 42.5,
            timestamp: 1609459200,
            tags: vec![Tag::new("host", "server01"), Tag::new("dc", "us-east")],
        };

        assert_eq!(
            "2021-01-01 00:00:00\tsys.cpu.user\t42.5\thost=server01 dc=us-east",
            String::from_utf8(HumanReadableEncoder::new().encode(&point)?)?,
        );
        Ok(())
    }
}
