use chrono::prelude::*;

// Unix timestamp in seconds.
pub type Timestamp = i64;

pub trait TimestampTrait {
    fn to_string_secs(&self) -> String;
}

impl TimestampTrait for Timestamp {
    fn to_string_secs(&self) -> String {
        match NaiveDateTime::from_timestamp_opt(*self, 0) {
            Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => self.to_string(),
        }
    }
}
