mod opentsdb;

use crate::model::MetricPoint;

/// Maps a parsed batch onto canonical metric points, keeping batch order.
/// Input is expected to be valid already, so there is no failure path.
pub trait Transformer {
    fn transform(self) -> Vec<MetricPoint>;
}
