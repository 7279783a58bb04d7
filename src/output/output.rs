use super::encoder::Encoder;
use super::writer::Writer;
use crate::error::Result;
use crate::model::MetricPoint;

pub struct Output {
    writer: Box<dyn Writer>,
    encoder: Box<dyn Encoder>,
}

impl Output {
    pub fn new(writer: Box<dyn Writer>, encoder: Box<dyn Encoder>) -> Self {
        Self { writer, encoder }
    }

    pub fn write(&mut self, point: &MetricPoint) -> Result<()> {
        let buf = self.encoder.encode(point)?;

        self.writer
            .write(&buf)
            .map_err(|e| ("writer failed", e))?;

        Ok(())
    }
}
