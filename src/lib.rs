//! Ray-driven 3D slider control.
//!
//! A slider's handle moves along a fixed track in its parent's space. A
//! pointing [`Pose`] (hand or controller ray) is projected onto that track to
//! find the intended position, which becomes a normalized value in \[0, 1\].
//! Programmatic sets can snap to a finite [`Resolution`] and animate over a
//! configured transition time, advanced by [`Slider::tick`] once per frame.
//!
//! Drag operations append [`SliderEvent`]s to a caller-provided buffer in
//! call order. Nothing here performs I/O or installs a logger; diagnostics go
//! through the `log` facade.

pub mod animator;
pub mod axis;
pub mod board;
pub mod clock;
pub mod config;
pub mod constants;
pub mod drag;
pub mod error;
pub mod event;
pub mod projector;
pub mod quantize;
pub mod slider;

pub use animator::Transition;
pub use axis::Track;
pub use board::{BoardEvent, SliderBoard};
pub use clock::FrameClock;
pub use config::SliderConfig;
pub use drag::DragSession;
pub use error::{Result, SliderError};
pub use event::{Attribute, AttributeValue, SliderEvent};
pub use projector::{intersect_ray_plane, project_pose_onto_axis, Pose};
pub use quantize::{quantize, Resolution};
pub use slider::Slider;
