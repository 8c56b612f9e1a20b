//! Field descriptor model for delimited and fixed-width text layouts.
//!
//! A [`FieldDescriptor`] carries everything a reader needs to turn one raw
//! text column into a typed value: its layout coordinates, the resolved
//! [`FieldType`] with its parse `format` and `precision`, the number symbols,
//! the [`TrimPolicy`] and the null handling. The guessers in
//! [`crate::guess`] populate it from a set of raw samples.

use std::{cmp::Ordering, fmt};

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FieldType {
    #[default]
    String,
    Date,
    Number,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Date => "Date",
            FieldType::Number => "Number",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Which sides of a raw value carry whitespace that should be removed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TrimPolicy: u8 {
        const LEFT = 0b01;
        const RIGHT = 0b10;
    }
}

impl TrimPolicy {
    pub const NONE: TrimPolicy = TrimPolicy::empty();
    pub const BOTH: TrimPolicy = TrimPolicy::LEFT.union(TrimPolicy::RIGHT);

    pub fn code(&self) -> &'static str {
        match (self.contains(Self::LEFT), self.contains(Self::RIGHT)) {
            (false, false) => "none",
            (true, false) => "left",
            (false, true) => "right",
            (true, true) => "both",
        }
    }

    pub fn describe(&self) -> &'static str {
        match (self.contains(Self::LEFT), self.contains(Self::RIGHT)) {
            (false, false) => "not trimmed",
            (true, false) => "left",
            (false, true) => "right",
            (true, true) => "both",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Some(Self::NONE),
            "left" => Some(Self::LEFT),
            "right" => Some(Self::RIGHT),
            "both" => Some(Self::BOTH),
            _ => None,
        }
    }
}

impl Default for TrimPolicy {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for TrimPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for TrimPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for TrimPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        TrimPolicy::from_code(&token).ok_or_else(|| {
            de::Error::custom(format!(
                "Unknown trim type '{token}'. Supported codes: none, left, right, both"
            ))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default = "FieldDescriptor::unset")]
    pub position: i32,
    #[serde(default = "FieldDescriptor::unset")]
    pub length: i32,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(rename = "trim_type", default)]
    pub trim_policy: TrimPolicy,
    #[serde(default = "FieldDescriptor::unset")]
    pub precision: i32,
    #[serde(rename = "currency", default, skip_serializing_if = "String::is_empty")]
    pub currency_symbol: String,
    #[serde(rename = "decimal", default, skip_serializing_if = "String::is_empty")]
    pub decimal_symbol: String,
    #[serde(rename = "group", default, skip_serializing_if = "String::is_empty")]
    pub group_symbol: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub null_string: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub if_null_value: String,
    #[serde(default)]
    pub ignore: bool,
    #[serde(default)]
    pub repeat: bool,
    #[serde(skip)]
    samples: Option<Vec<Option<String>>>,
    #[serde(skip)]
    samples_trimmed: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, position: i32, length: i32) -> Self {
        Self {
            name: name.into(),
            position,
            length,
            field_type: FieldType::String,
            format: String::new(),
            trim_policy: TrimPolicy::NONE,
            precision: -1,
            currency_symbol: String::new(),
            decimal_symbol: String::new(),
            group_symbol: String::new(),
            null_string: String::new(),
            if_null_value: String::new(),
            ignore: false,
            repeat: false,
            samples: None,
            samples_trimmed: false,
        }
    }

    /// Creates a default descriptor at a new layout slot; no settings carry over.
    pub fn with_layout(&self, name: impl Into<String>, position: i32, length: i32) -> Self {
        Self::new(name, position, length)
    }

    const fn unset() -> i32 {
        -1
    }

    pub fn type_desc(&self) -> &'static str {
        self.field_type.as_str()
    }

    pub fn set_samples(&mut self, samples: Vec<Option<String>>) {
        self.samples = Some(samples);
        self.samples_trimmed = false;
    }

    pub fn clear_samples(&mut self) {
        self.samples = None;
        self.samples_trimmed = false;
    }

    /// Whether the attached samples were already trimmed by a trim guess.
    pub fn samples_trimmed(&self) -> bool {
        self.samples_trimmed
    }

    pub(crate) fn mark_samples_trimmed(&mut self) {
        self.samples_trimmed = true;
    }

    pub fn samples(&self) -> Option<&[Option<String>]> {
        self.samples.as_deref()
    }

    pub(crate) fn samples_mut(&mut self) -> Option<&mut Vec<Option<String>>> {
        self.samples.as_mut()
    }

    pub fn flip_ignored(&mut self) {
        self.ignore = !self.ignore;
    }

    pub fn flip_repeated(&mut self) {
        self.repeat = !self.repeat;
    }

    /// Case-insensitive match against the configured null marker.
    pub fn is_null_marker(&self, value: &str) -> bool {
        value.to_lowercase() == self.null_string.to_lowercase()
    }

    pub fn cmp_position(&self, other: &Self) -> Ordering {
        self.position.cmp(&other.position)
    }

    pub fn same_position(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Default for FieldDescriptor {
    fn default() -> Self {
        Self::new(String::new(), -1, -1)
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.name, self.position, self.length)
    }
}
