use std::io::Read;

use log::{debug, info};

use crate::error::Result;
use crate::output::Output;
use crate::parse::parse_opentsdb;
use crate::transform::Transformer;

// reader -> blob -> parse_opentsdb -> OpenTsdbList -> transform -> MetricPoint(s) -> Output
//
// The whole blob is parsed before anything is written, so a malformed line
// leaves the output untouched.
pub struct Runner {
    reader: Box<dyn Read>,
    output: Output,
}

impl Runner {
    pub fn new(reader: Box<dyn Read>, output: Output) -> Self {
        Self { reader, output }
    }

    /// Returns the number of points written.
    pub fn run(&mut self) -> Result<usize> {
        let mut blob = String::new();
        self.reader
            .read_to_string(&mut blob)
            .map_err(|e| ("reader failed", e))?;
        debug!("read {} byte(s) of input", blob.len());

        let points = parse_opentsdb(&blob)?.transform();
        for point in points.iter() {
            self.output.write(point)?;
        }

        info!("wrote {} metric point(s)", points.len());
        Ok(points.len())
    }
}
