use serde::{Deserialize, Serialize};

use super::tag::Tag;
use super::timestamp::Timestamp;
use super::{MetricName, SampleValue};

/// The format-agnostic metric point handed to the rest of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub name: MetricName,
    pub value: SampleValue,
    pub timestamp: Timestamp,
    pub tags: Vec<Tag>,
}

impl MetricPoint {
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.value.as_str())
    }
}
