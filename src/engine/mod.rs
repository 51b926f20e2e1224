//! Engine - the contracts between a host toolkit and its elements.
//!
//! - [`Element`]: the two-pass measure/layout protocol every node speaks
//! - [`Container`]: the params factory and event hooks a composite overrides
//!
//! # Architecture
//!
//! ```text
//! host ──measure(specs)──► container ──measure_child_with_margins──► child
//! host ──layout(frame)───► container ──layout(child frame)─────────► child
//! ```
//!
//! Child storage, painting and event dispatch stay with the host; a
//! container only arranges what it is given.

mod container;
mod element;

pub use container::*;
pub use element::*;
