//! Layout Module
//!
//! Sizing vocabulary and per-child params for the measure/layout passes.
//!
//! # Architecture
//!
//! 1. A parent derives a [`MeasureSpec`] per axis for each child from its
//!    own spec, its padding and the child's [`FlowParams`]
//! 2. The child resolves a desired size against those specs with
//!    [`resolve_size_and_state`], flagging any clipping in [`MeasuredState`]
//! 3. The parent folds child states into its own resolved size
//!
//! Params arrive from the host either as a [`LayoutParams`] union or as
//! markup attributes read through an [`AttributeSet`].

mod attributes;
mod measure_spec;
mod params;

pub use attributes::*;
pub use measure_spec::*;
pub use params::*;
