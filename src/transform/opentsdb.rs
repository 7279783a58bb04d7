use super::Transformer;
use crate::model::MetricPoint;
use crate::parse::{OpenTsdb, OpenTsdbList};

impl From<OpenTsdb> for MetricPoint {
    fn from(metric: OpenTsdb) -> Self {
        Self {
            name: metric.name,
            value: metric.value,
            timestamp: metric.timestamp,
            tags: metric.tags,
        }
    }
}

impl Transformer for OpenTsdbList {
    fn transform(self) -> Vec<MetricPoint> {
        self.into_iter().map(MetricPoint::from).collect()
    }
}
