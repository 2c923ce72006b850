use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de::Error as _, Deserialize, Deserializer};

use crate::flag::Flag;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Loose {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Loose {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Loose::Int(value) => Some(*value),
            Loose::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                Some(*value as i64)
            }
            Loose::Float(_) | Loose::Bool(_) => None,
            Loose::Text(text) => {
                let text = text.trim();
                text.parse::<i64>().ok().or_else(|| {
                    text.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && f.fract() == 0.0)
                        .map(|f| f as i64)
                })
            }
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Loose::Int(value) => Some(*value as f64),
            Loose::Float(value) => Some(*value),
            Loose::Bool(_) => None,
            Loose::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            Loose::Bool(value) => value.to_string(),
            Loose::Int(value) => value.to_string(),
            Loose::Float(value) => number_label(*value),
            Loose::Text(text) => text.clone(),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, Loose::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for Loose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loose::Text(text) => write!(f, "{:?}", text),
            other => f.write_str(&other.as_text()),
        }
    }
}

/// Renders integral floats without a fractional part (`12.0` -> `12`).
pub fn number_label(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%m/%d/%Y"))
        .ok()
        .or_else(|| parse_date_time(text).map(|dt| dt.date()))
}

pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .ok()
        .or_else(|| parse_date_time(text).map(|dt| dt.time()))
}

fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.naive_utc()))
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Loose>, D::Error> {
    Ok(Option::<Loose>::deserialize(deserializer)?.filter(|value| !value.is_blank()))
}

pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Loose::deserialize(deserializer)?;
    value
        .as_int()
        .ok_or_else(|| D::Error::custom(format!("expected an integer, got {}", value)))
}

pub fn opt_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    present(deserializer)?
        .map(|value| {
            value
                .as_int()
                .ok_or_else(|| D::Error::custom(format!("expected an integer, got {}", value)))
        })
        .transpose()
}

/// Absent, null and blank values read as zero.
pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(opt_float(deserializer)?.unwrap_or_default())
}

pub fn opt_float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    present(deserializer)?
        .map(|value| {
            value
                .as_float()
                .ok_or_else(|| D::Error::custom(format!("expected a number, got {}", value)))
        })
        .transpose()
}

pub fn opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(present(deserializer)?.map(|value| value.as_text()))
}

pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Flag, D::Error> {
    Ok(present(deserializer)?
        .map(|value| Flag::from(&value))
        .unwrap_or_default())
}

pub fn date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let value = Loose::deserialize(deserializer)?;
    match &value {
        Loose::Text(text) => parse_date(text),
        _ => None,
    }
    .ok_or_else(|| D::Error::custom(format!("expected a date, got {}", value)))
}

pub fn opt_time<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveTime>, D::Error> {
    present(deserializer)?
        .map(|value| {
            match &value {
                Loose::Text(text) => parse_time(text),
                _ => None,
            }
            .ok_or_else(|| D::Error::custom(format!("expected a time, got {}", value)))
        })
        .transpose()
}
