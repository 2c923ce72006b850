use serde::{Serialize, Serializer};

use crate::de::Loose;

/// Yes/no column that may also hold garbage or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Flag {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Flag {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Flag::Yes => Some(true),
            Flag::No => Some(false),
            Flag::Unknown => None,
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Flag::Yes
        } else {
            Flag::No
        }
    }
}

impl From<&Loose> for Flag {
    fn from(value: &Loose) -> Self {
        match value {
            Loose::Bool(value) => Flag::from(*value),
            Loose::Int(1) => Flag::Yes,
            Loose::Int(0) => Flag::No,
            Loose::Float(value) if *value == 1.0 => Flag::Yes,
            Loose::Float(value) if *value == 0.0 => Flag::No,
            Loose::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" | "true" | "1" => Flag::Yes,
                "n" | "no" | "false" | "0" => Flag::No,
                _ => Flag::Unknown,
            },
            _ => Flag::Unknown,
        }
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_bool().serialize(serializer)
    }
}
