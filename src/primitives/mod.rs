//! Primitives - concrete elements.
//!
//! - [`FlowContainer`] - single-row container that skips children that overflow
//! - [`Block`] - leaf with a fixed content size
//!
//! Both implement [`Element`](crate::engine::Element), so a flow row can be a
//! child of another flow row.

mod block;
mod flow_container;

pub use block::*;
pub use flow_container::*;
