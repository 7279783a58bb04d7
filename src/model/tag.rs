use serde::{Deserialize, Serialize};

pub type TagName = String;

pub type TagValue = String;

/// A single `name=value` annotation attached to a metric point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: TagName,
    pub value: TagValue,
}

impl Tag {
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<TagName>,
        V: Into<TagValue>,
    {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
