//! Error type shared by every slider operation.

use thiserror::Error;

use crate::event::Attribute;

/// Failures reported synchronously by slider construction and operations.
///
/// Geometric degeneracy (a pointing ray parallel to the track) is not an
/// error: such updates are skipped without touching state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    #[error("slider `{name}` has a zero-length track")]
    ZeroLengthTrack { name: String },

    #[error("slider `{name}` has invalid position resolution {resolution}")]
    InvalidResolution { name: String, resolution: i64 },

    #[error("slider `{name}` has non-finite track endpoints")]
    NonFiniteInput { name: String },

    #[error("value {value} for slider `{name}` is outside [0, 1]")]
    ValueOutOfRange { name: String, value: f32 },

    #[error("attribute {attribute} of slider `{name}` requires a value of type {expected}")]
    AttributeType {
        name: String,
        attribute: Attribute,
        expected: &'static str,
    },

    #[error("unknown slider attribute `{name}`; allowed are VALUE and FIXED")]
    UnknownAttribute { name: String },

    #[error("cannot parse `{raw}` as a value for attribute {attribute}")]
    InvalidAttributeValue { attribute: Attribute, raw: String },

    #[error("slider `{name}` has no active drag")]
    NoActiveDrag { name: String },

    #[error("no slider named `{name}`")]
    UnknownSlider { name: String },

    #[error("a slider named `{name}` already exists")]
    DuplicateSlider { name: String },
}

pub type Result<T> = std::result::Result<T, SliderError>;
