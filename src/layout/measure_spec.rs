//! Measure Specs
//!
//! The constraint vocabulary passed from a parent to a child during the
//! measure pass, and the rules for turning a desired size into a resolved
//! one.
//!
//! # State bits
//!
//! A resolved dimension carries a `TOO_SMALL` flag when the constraint
//! clipped it. A node reports both axes in one [`MeasuredState`]: the width
//! flag sits in the top byte and the height flag is shifted down by
//! [`MEASURED_HEIGHT_STATE_SHIFT`]. Parents OR these together and fold them
//! back into their own resolved sizes so ancestors learn that something
//! below them was squeezed.
//!
//! ```text
//! bit 24  WIDTH  TOO_SMALL   (0x0100_0000)
//! bit  8  HEIGHT TOO_SMALL   (0x0000_0100)
//! ```

use bitflags::bitflags;

use crate::types::SizeRequest;

/// Shift applied to height state bits when packing both axes together.
pub const MEASURED_HEIGHT_STATE_SHIFT: u32 = 16;

/// Bits of a per-axis state that survive resolution.
pub const MEASURED_STATE_MASK: u32 = 0xff00_0000;

bitflags! {
    /// Clipping flags reported by the measure pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MeasuredState: u32 {
        /// The constraint was smaller than the size asked for.
        const TOO_SMALL = 0x0100_0000;
        /// Height flag in a packed two-axis state.
        const HEIGHT_TOO_SMALL = 0x0100_0000 >> MEASURED_HEIGHT_STATE_SHIFT;
    }
}

impl MeasuredState {
    /// Pack per-axis states into one two-axis state.
    pub fn pack(width: MeasuredState, height: MeasuredState) -> Self {
        let width_bits = width.bits() & MEASURED_STATE_MASK;
        let height_bits =
            (height.bits() >> MEASURED_HEIGHT_STATE_SHIFT) & (MEASURED_STATE_MASK >> MEASURED_HEIGHT_STATE_SHIFT);
        Self::from_bits_truncate(width_bits | height_bits)
    }

    /// Merge the state of another node into this one.
    #[inline]
    pub fn combine(self, other: MeasuredState) -> Self {
        self | other
    }

    /// Move the height half of a packed state into the per-axis position.
    pub fn height_state(self) -> Self {
        Self::from_bits_truncate(self.bits() << MEASURED_HEIGHT_STATE_SHIFT)
    }

    /// Width half of a packed state.
    pub fn width_state(self) -> Self {
        Self::from_bits_truncate(self.bits() & MEASURED_STATE_MASK)
    }

    #[inline]
    pub fn width_too_small(self) -> bool {
        self.contains(Self::TOO_SMALL)
    }

    #[inline]
    pub fn height_too_small(self) -> bool {
        self.contains(Self::HEIGHT_TOO_SMALL)
    }
}

// =============================================================================
// MEASURE SPEC
// =============================================================================

/// How strictly a parent constrains one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    /// The child must be exactly `size`.
    Exactly,
    /// The child may be any size up to `size`.
    AtMost,
    /// No restriction.
    Unspecified,
}

/// A (mode, size) constraint for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: i32,
}

impl MeasureSpec {
    pub const fn new(mode: MeasureMode, size: i32) -> Self {
        Self { mode, size }
    }

    pub const fn exactly(size: i32) -> Self {
        Self::new(MeasureMode::Exactly, size)
    }

    pub const fn at_most(size: i32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    pub const fn unspecified() -> Self {
        Self::new(MeasureMode::Unspecified, 0)
    }
}

/// A resolved size along one axis plus its clipping state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeasuredDimension {
    pub size: i32,
    pub state: MeasuredState,
}

impl MeasuredDimension {
    pub const fn new(size: i32) -> Self {
        Self {
            size,
            state: MeasuredState::empty(),
        }
    }

    #[inline]
    pub fn too_small(&self) -> bool {
        self.state.contains(MeasuredState::TOO_SMALL)
    }
}

// =============================================================================
// RESOLUTION RULES
// =============================================================================

/// Reconcile a desired size with a constraint.
///
/// `child_state` must already be in per-axis position; for the height axis
/// pass [`MeasuredState::height_state`] of the packed child state.
pub fn resolve_size_and_state(size: i32, spec: MeasureSpec, child_state: MeasuredState) -> MeasuredDimension {
    let mut resolved = match spec.mode {
        MeasureMode::AtMost if spec.size < size => MeasuredDimension {
            size: spec.size,
            state: MeasuredState::TOO_SMALL,
        },
        MeasureMode::AtMost | MeasureMode::Unspecified => MeasuredDimension::new(size),
        MeasureMode::Exactly => MeasuredDimension::new(spec.size),
    };
    resolved.state |= MeasuredState::from_bits_truncate(child_state.bits() & MEASURED_STATE_MASK);
    resolved
}

/// Derive the spec offered to a child along one axis.
///
/// `padding` is everything the parent has already spoken for on that axis:
/// its own padding, the child's margins and any space used by siblings.
pub fn child_measure_spec(parent: MeasureSpec, padding: i32, request: SizeRequest) -> MeasureSpec {
    let available = parent.size.saturating_sub(padding).max(0);

    match (request, parent.mode) {
        (SizeRequest::Exact(size), _) if size >= 0 => MeasureSpec::exactly(size),
        (SizeRequest::MatchParent, MeasureMode::Exactly) => MeasureSpec::exactly(available),
        (SizeRequest::MatchParent, MeasureMode::AtMost) => MeasureSpec::at_most(available),
        (SizeRequest::WrapContent, MeasureMode::Exactly | MeasureMode::AtMost) => {
            MeasureSpec::at_most(available)
        }
        (SizeRequest::MatchParent | SizeRequest::WrapContent, MeasureMode::Unspecified) => {
            MeasureSpec::new(MeasureMode::Unspecified, available)
        }
        // Negative exact sizes are not a request the host knows; it leaves
        // the child unconstrained with no size hint.
        (SizeRequest::Exact(_), _) => MeasureSpec::unspecified(),
    }
}
