//! Core types for flow-container.
//!
//! Geometry and sizing vocabulary shared by the measure and layout passes.
//! All values are whole pixels in the container's local coordinate space.

use taffy::{Rect, Size};

// =============================================================================
// Insets
// =============================================================================

/// Padding or margins, one value per edge.
///
/// Reuses taffy's edge record so the values can be handed straight to a
/// taffy style when cross-checking layouts.
pub type Insets = Rect<i32>;

/// Build insets from the four edges in left, top, right, bottom order.
pub const fn insets(left: i32, top: i32, right: i32, bottom: i32) -> Insets {
    Rect {
        left,
        right,
        top,
        bottom,
    }
}

/// Same value on all four edges.
pub const fn uniform(value: i32) -> Insets {
    insets(value, value, value, value)
}

/// No inset on any edge.
pub const ZERO_INSETS: Insets = uniform(0);

/// Sum of the left and right edges, saturating at the `i32` bounds.
#[inline]
pub fn horizontal(insets: &Insets) -> i32 {
    insets.left.saturating_add(insets.right)
}

/// Sum of the top and bottom edges, saturating at the `i32` bounds.
#[inline]
pub fn vertical(insets: &Insets) -> i32 {
    insets.top.saturating_add(insets.bottom)
}

/// Width/height pair in pixels.
pub type PixelSize = Size<i32>;

// =============================================================================
// Frame
// =============================================================================

/// Edge coordinates of a positioned element, relative to its parent.
///
/// `right` and `bottom` are exclusive: a frame `[0, 40)` is 40 pixels wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Frame {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Frame {
    /// Create a frame from its four edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Frame anchored at the origin with the given size.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Size of the frame.
    pub const fn size(&self) -> PixelSize {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }
}

// =============================================================================
// Size Requests
// =============================================================================

/// How a child asks to be sized along one axis.
///
/// The host toolkit's generic sizing vocabulary: an exact pixel value,
/// "fill available" or "wrap content".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeRequest {
    /// Exactly this many pixels.
    Exact(i32),
    /// As large as the parent allows.
    MatchParent,
    /// Just large enough for the content.
    WrapContent,
}

impl Default for SizeRequest {
    fn default() -> Self {
        Self::WrapContent
    }
}

impl From<i32> for SizeRequest {
    fn from(value: i32) -> Self {
        Self::Exact(value)
    }
}

// =============================================================================
// Display Metrics
// =============================================================================

/// Screen density used to turn markup units into pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Pixels per density-independent pixel (`dp`).
    pub density: f32,
    /// Pixels per scale-independent pixel (`sp`).
    pub scaled_density: f32,
}

impl DisplayMetrics {
    /// Metrics with the same factor for `dp` and `sp`.
    pub const fn with_density(density: f32) -> Self {
        Self {
            density,
            scaled_density: density,
        }
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}
