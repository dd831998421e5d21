//! Notifications emitted by a slider and the attributes it accepts.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SliderError};

/// Drag notification carrying the slider's normalized value at emission time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent {
    DragStart { value: f32 },
    Drag { value: f32 },
    DragEnd { value: f32 },
}

impl SliderEvent {
    pub fn value(&self) -> f32 {
        match *self {
            Self::DragStart { value } | Self::Drag { value } | Self::DragEnd { value } => value,
        }
    }

    /// Event name as used by external interaction descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DragStart { .. } => "SLIDER_DRAG_START",
            Self::Drag { .. } => "SLIDER_DRAG",
            Self::DragEnd { .. } => "SLIDER_DRAG_END",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Normalized position; setting it starts an animated transition.
    Value,
    /// When true, continued drag updates are ignored.
    Fixed,
}

impl Attribute {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Value => "VALUE",
            Self::Fixed => "FIXED",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "VALUE" => Ok(Self::Value),
            "FIXED" => Ok(Self::Fixed),
            _ => Err(SliderError::UnknownAttribute { name: s.to_owned() }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttributeValue {
    Float(f32),
    Bool(bool),
}

impl AttributeValue {
    /// Parse the textual form found in interaction description files
    /// (`"0.25"` for `VALUE`, `"true"`/`"false"` for `FIXED`).
    pub fn parse(attribute: Attribute, raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let parsed = match attribute {
            Attribute::Value => trimmed.parse::<f32>().ok().map(Self::Float),
            Attribute::Fixed => match trimmed.to_ascii_lowercase().as_str() {
                "true" => Some(Self::Bool(true)),
                "false" => Some(Self::Bool(false)),
                _ => None,
            },
        };
        parsed.ok_or_else(|| SliderError::InvalidAttributeValue {
            attribute,
            raw: raw.to_owned(),
        })
    }
}
