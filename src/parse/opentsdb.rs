//! Parse OpenTSDB `put` lines.
//!
//! Each line reads `<name> <timestamp> <value> <tag>=<value> [<tag>=<value> ...]`.
//! See http://opentsdb.net/docs/build/html/user_guide/writing/index.html

use log::{debug, trace};
use nom::{
    bytes::complete::is_not, character::complete::char, combinator::all_consuming,
    sequence::separated_pair, IResult,
};

use super::error::{ParseError, ParseErrorKind};
use crate::model::{MetricName, SampleValue, Tag, Timestamp};

// Name, timestamp, value and at least one tag.
const MIN_PARTS: usize = 4;

// A 13 digit timestamp has millisecond resolution.
const MILLIS_DIGITS: usize = 13;

#[derive(Debug, Clone, PartialEq)]
pub struct OpenTsdb {
    pub name: MetricName,
    pub value: SampleValue,
    pub timestamp: Timestamp,
    pub tags: Vec<Tag>,
}

/// Metrics of one batch, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenTsdbList(Vec<OpenTsdb>);

impl OpenTsdbList {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OpenTsdb> {
        self.0.iter()
    }
}

impl IntoIterator for OpenTsdbList {
    type Item = OpenTsdb;
    type IntoIter = std::vec::IntoIter<OpenTsdb>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<OpenTsdb>> for OpenTsdbList {
    fn from(metrics: Vec<OpenTsdb>) -> Self {
        Self(metrics)
    }
}

/// Parses a blob of newline separated metrics. Stops at the first
/// malformed line and returns nothing parsed so far.
pub fn parse_opentsdb(output: &str) -> Result<OpenTsdbList, ParseError> {
    let mut metrics = Vec::new();

    for (idx, line) in output.trim().split('\n').enumerate() {
        if line.is_empty() {
            continue;
        }

        let metric = parse_line(line).map_err(|kind| ParseError::new(idx + 1, kind))?;
        trace!("line {} parsed: {:?}", idx + 1, metric);
        metrics.push(metric);
    }

    debug!("parsed {} opentsdb metric(s)", metrics.len());
    Ok(OpenTsdbList(metrics))
}

fn parse_line(line: &str) -> Result<OpenTsdb, ParseErrorKind> {
    let parts: Vec<&str> = line.split(' ').collect();
    if parts.len() < MIN_PARTS || parts[0].is_empty() {
        return Err(ParseErrorKind::InvalidMetric(line.to_owned()));
    }

    let timestamp = parse_timestamp(parts[1])?;
    let value = parse_value(parts[2])?;
    let tags = parts[3..]
        .iter()
        .map(|part| parse_tag(part))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OpenTsdb {
        name: parts[0].to_owned(),
        value,
        timestamp,
        tags,
    })
}

fn parse_timestamp(part: &str) -> Result<Timestamp, ParseErrorKind> {
    let timestamp = part
        .parse::<Timestamp>()
        .map_err(|_| ParseErrorKind::InvalidTimestamp(part.to_owned()))?;

    if part.bytes().filter(u8::is_ascii_digit).count() == MILLIS_DIGITS {
        Ok(timestamp / 1000)
    } else {
        Ok(timestamp)
    }
}

fn parse_value(part: &str) -> Result<SampleValue, ParseErrorKind> {
    match part.parse::<SampleValue>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ParseErrorKind::InvalidValue(part.to_owned())),
    }
}

fn parse_tag(part: &str) -> Result<Tag, ParseErrorKind> {
    match tag_pair(part) {
        Ok((_, (name, value))) => Ok(Tag::new(name, value)),
        Err(_) => Err(ParseErrorKind::InvalidTag(part.to_owned())),
    }
}

fn tag_pair(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(separated_pair(is_not("="), char('='), is_not("=")))(input)
}
