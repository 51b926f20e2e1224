//! Block - a leaf element with a fixed content size.
//!
//! Stands in for labels, icons and other widgets whose size comes from their
//! own content. Flow rows in the demo and the tests are built from blocks.

use crate::engine::Element;
use crate::layout::{resolve_size_and_state, MeasureSpec, MeasuredDimension, MeasuredState};
use crate::types::{Frame, PixelSize};

/// Leaf element with a fixed content size.
///
/// Measures like a plain host view: the content size (raised to the
/// minimum) is resolved against each spec. A text label or icon behaves the
/// same way from its parent's point of view.
#[derive(Debug, Clone)]
pub struct Block {
    /// Optional name, used only in logs.
    pub label: Option<String>,
    pub content: PixelSize,
    pub min_size: PixelSize,
    measured: (MeasuredDimension, MeasuredDimension),
    frame: Option<Frame>,
    layout_count: usize,
}

impl Block {
    /// Block whose content is `width` x `height` pixels.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            label: None,
            content: PixelSize { width, height },
            min_size: PixelSize { width: 0, height: 0 },
            measured: (MeasuredDimension::default(), MeasuredDimension::default()),
            frame: None,
            layout_count: 0,
        }
    }

    pub fn labeled(label: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(width, height)
        }
    }

    pub fn with_min_size(mut self, width: i32, height: i32) -> Self {
        self.min_size = PixelSize { width, height };
        self
    }

    /// How many times `layout` has been called.
    pub fn layout_count(&self) -> usize {
        self.layout_count
    }
}

impl Element for Block {
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) {
        let width = self.content.width.max(self.min_size.width);
        let height = self.content.height.max(self.min_size.height);
        self.measured = (
            resolve_size_and_state(width, width_spec, MeasuredState::empty()),
            resolve_size_and_state(height, height_spec, MeasuredState::empty()),
        );
    }

    fn measured_width(&self) -> MeasuredDimension {
        self.measured.0
    }

    fn measured_height(&self) -> MeasuredDimension {
        self.measured.1
    }

    fn layout(&mut self, frame: Frame) {
        self.frame = Some(frame);
        self.layout_count += 1;
    }

    fn frame(&self) -> Option<Frame> {
        self.frame
    }

    fn name(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_measures_content_under_loose_spec() {
        let mut block = Block::new(30, 12);
        block.measure(MeasureSpec::at_most(100), MeasureSpec::unspecified());
        assert_eq!(block.measured_width(), MeasuredDimension::new(30));
        assert_eq!(block.measured_height(), MeasuredDimension::new(12));
        assert_eq!(block.measured_state(), MeasuredState::empty());
    }

    #[test]
    fn test_block_reports_clipping() {
        let mut block = Block::new(30, 12);
        block.measure(MeasureSpec::at_most(20), MeasureSpec::at_most(5));
        assert_eq!(block.measured_width().size, 20);
        assert_eq!(block.measured_height().size, 5);

        let state = block.measured_state();
        assert!(state.width_too_small());
        assert!(state.height_too_small());
    }

    #[test]
    fn test_block_min_size_wins() {
        let mut block = Block::new(4, 4).with_min_size(10, 8);
        block.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified());
        assert_eq!(block.measured_width().size, 10);
        assert_eq!(block.measured_height().size, 8);
    }

    #[test]
    fn test_block_records_frame() {
        let mut block = Block::labeled("chip", 10, 10);
        assert_eq!(block.frame(), None);
        block.layout(Frame::new(2, 3, 12, 13));
        assert_eq!(block.frame(), Some(Frame::new(2, 3, 12, 13)));
        assert_eq!(block.layout_count(), 1);
        assert_eq!(block.name(), Some("chip"));
    }
}
