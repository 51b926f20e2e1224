//! Element - the measure/layout contract every node satisfies.
//!
//! The host drives each node through two passes per frame:
//!
//! 1. `measure(width_spec, height_spec)` records a measured size and state.
//! 2. `layout(frame)` receives the node's final frame in parent coordinates.
//!
//! Containers call the same two methods on their children from inside their
//! own passes, so a container is just another element.

use crate::layout::{MeasureSpec, MeasuredDimension, MeasuredState};
use crate::types::Frame;

/// A measurable, positionable node.
pub trait Element {
    /// Resolve this element's size against the given constraints.
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec);

    /// Width recorded by the last `measure`.
    fn measured_width(&self) -> MeasuredDimension;

    /// Height recorded by the last `measure`.
    fn measured_height(&self) -> MeasuredDimension;

    /// Both clipping flags packed into one state (height shifted down).
    fn measured_state(&self) -> MeasuredState {
        MeasuredState::pack(self.measured_width().state, self.measured_height().state)
    }

    /// Place this element at `frame`, in its parent's coordinates.
    fn layout(&mut self, frame: Frame);

    /// Frame from the last `layout`, if it has been laid out at all.
    fn frame(&self) -> Option<Frame>;

    /// Name shown in logs.
    fn name(&self) -> Option<&str> {
        None
    }
}
