mod error;
mod opentsdb;

pub use error::{ParseError, ParseErrorKind};
pub use opentsdb::{parse_opentsdb, OpenTsdb, OpenTsdbList};
