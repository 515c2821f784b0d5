//! Serialized query parameters.
//!
//! Every producer renders its value to the final string up front, so a
//! parameter is just a key and a string value.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::date_format::format_brew_date;

/// A single `key=value` entry of a beers query.
pub trait QueryParameter {
    /// The query key, e.g. `abv_gt`.
    fn key(&self) -> String;

    /// The unencoded query value.
    fn value(&self) -> String;

    /// Returns the key and value as a tuple.
    fn to_pair(&self) -> (String, String) {
        (self.key(), self.value())
    }
}

/// Numeric fields that support range filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeField {
    /// Alcohol by volume.
    Abv,
    /// International bitterness units.
    Ibu,
    /// European brewery convention color.
    Ebc,
}

impl RangeField {
    /// All range fields, in declaration order.
    pub const ALL: [RangeField; 3] = [RangeField::Abv, RangeField::Ibu, RangeField::Ebc];

    /// Returns the field prefix used in query keys.
    pub fn as_str(self) -> &'static str {
        match self {
            RangeField::Abv => "abv",
            RangeField::Ibu => "ibu",
            RangeField::Ebc => "ebc",
        }
    }
}

impl fmt::Display for RangeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Range parameter over a numeric field, e.g. `abv_gt=4.5`.
///
/// The value is rendered with `f32`'s `Display`: the shortest decimal that
/// parses back to the same `f32`, no exponent, `.` as separator, and no
/// fractional part for integral values (`5.0` renders as `5`).
///
/// No validation is applied; negative or non-finite values pass through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeParameter {
    /// The filtered field.
    pub field: RangeField,
    /// Direction of the comparison.
    pub condition: Condition,
    /// The operand.
    pub value: f32,
}

impl RangeParameter {
    /// Creates a new range parameter.
    pub fn new(field: RangeField, condition: Condition, value: f32) -> Self {
        Self {
            field,
            condition,
            value,
        }
    }
}

impl QueryParameter for RangeParameter {
    fn key(&self) -> String {
        format!("{}_{}", self.field, self.condition.literal())
    }

    fn value(&self) -> String {
        self.value.to_string()
    }
}

/// Plain string parameter, e.g. `hops=Ahtanum`.
///
/// Spaces in the value are replaced with underscores at construction. Nothing
/// else is normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringParameter {
    key: &'static str,
    value: String,
}

impl StringParameter {
    /// Creates a new string parameter, replacing every space in `value` with `_`.
    pub fn new(key: &'static str, value: &str) -> Self {
        Self {
            key,
            value: value.replace(' ', "_"),
        }
    }

    /// Creates the `ids` parameter: decimal ids joined with `|`.
    ///
    /// An empty slice yields an empty value.
    pub fn ids(ids: &[i64]) -> Self {
        let value = ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join("|");
        Self { key: "ids", value }
    }
}

impl QueryParameter for StringParameter {
    fn key(&self) -> String {
        self.key.to_string()
    }

    fn value(&self) -> String {
        self.value.clone()
    }
}

/// Date range parameter, e.g. `brewed_lt=05-2010`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParameter {
    /// Key prefix, e.g. `brewed`.
    pub field: &'static str,
    /// Direction of the comparison.
    pub condition: Condition,
    /// The operand, rendered as month and year.
    pub date: NaiveDate,
}

impl DateParameter {
    /// Creates a new date parameter.
    pub fn new(field: &'static str, condition: Condition, date: NaiveDate) -> Self {
        Self {
            field,
            condition,
            date,
        }
    }
}

impl QueryParameter for DateParameter {
    fn key(&self) -> String {
        format!("{}_{}", self.field, self.condition.literal())
    }

    fn value(&self) -> String {
        format_brew_date(self.date)
    }
}

/// The parameter a [`BeerFilter`](super::BeerFilter) resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    /// Numeric range.
    Range(RangeParameter),
    /// Plain string or id list.
    String(StringParameter),
    /// Date range.
    Date(DateParameter),
}

impl Parameter {
    /// Converts the parameter into a serializable pair.
    pub fn to_query_pair(&self) -> QueryPair {
        QueryPair {
            key: self.key(),
            value: self.value(),
        }
    }
}

impl QueryParameter for Parameter {
    fn key(&self) -> String {
        match self {
            Parameter::Range(p) => p.key(),
            Parameter::String(p) => p.key(),
            Parameter::Date(p) => p.key(),
        }
    }

    fn value(&self) -> String {
        match self {
            Parameter::Range(p) => p.value(),
            Parameter::String(p) => p.value(),
            Parameter::Date(p) => p.value(),
        }
    }
}

impl From<RangeParameter> for Parameter {
    fn from(p: RangeParameter) -> Self {
        Parameter::Range(p)
    }
}

impl From<StringParameter> for Parameter {
    fn from(p: StringParameter) -> Self {
        Parameter::String(p)
    }
}

impl From<DateParameter> for Parameter {
    fn from(p: DateParameter) -> Self {
        Parameter::Date(p)
    }
}

/// An owned key/value pair, serializable as `{"key": .., "value": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPair {
    /// The query key.
    pub key: String,
    /// The unencoded query value.
    pub value: String,
}
