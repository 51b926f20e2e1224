//! # flow-container
//!
//! A single-row flow container for retained-mode UI toolkits.
//!
//! Children are arranged left to right. A child that would cross the right
//! edge is skipped for that pass instead of wrapped or shrunk, and later
//! children that still fit are placed after the last one that did.
//!
//! ## Architecture
//!
//! The host drives a two-pass protocol:
//! ```text
//! measure(width_spec, height_spec) → measured size + clip state
//! layout(frame)                    → child frames in local coordinates
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Geometry and sizing vocabulary (Frame, Insets, SizeRequest)
//! - [`layout`] - Measure specs, clip state, layout params, markup attributes
//! - [`engine`] - Element and Container contracts
//! - [`primitives`] - FlowContainer and Block
//! - [`error`] - Attribute parsing errors

pub mod engine;
pub mod error;
pub mod layout;
pub mod primitives;
pub mod types;

pub use types::*;

pub use error::{AttributeError, Result};

pub use engine::{Container, Element};

pub use layout::{
    AttributeSet, BaseParams, FlowParams, LayoutParams, MarginParams, MeasureMode, MeasureSpec,
    MeasuredDimension, MeasuredState, child_measure_spec, resolve_size_and_state,
};

pub use primitives::{Block, FlowContainer, FlowProps, Placement};
