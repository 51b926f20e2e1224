//! Flow Container - single-row, left-to-right layout that skips overflow.
//!
//! Children are laid out in insertion order along one row. Each child sits
//! at `padding.top + margin.top`, directly after the previous placed child's
//! right margin. A child whose right edge would cross the container's inner
//! right edge is skipped for that pass: it is not laid out and takes no
//! space, and later, narrower children still get their chance.
//!
//! Measurement is optimistic. Every child is offered the full incoming width
//! and the container asks for the sum of all children, including ones the
//! layout pass will end up skipping.
//!
//! # Example
//!
//! ```
//! use flow_container::{Block, Element, FlowContainer, FlowProps, Frame, MeasureSpec, Placement};
//!
//! let mut row = FlowContainer::new(FlowProps::default());
//! for _ in 0..3 {
//!     row.add_child(Block::new(40, 10), None);
//! }
//!
//! row.measure(MeasureSpec::exactly(100), MeasureSpec::at_most(50));
//! row.layout(Frame::from_size(100, 10));
//!
//! assert_eq!(row.placement(0), Some(Placement::Placed(Frame::new(0, 0, 40, 10))));
//! assert_eq!(row.placement(1), Some(Placement::Placed(Frame::new(40, 0, 80, 10))));
//! assert_eq!(row.placement(2), Some(Placement::Skipped));
//! ```

use std::fmt;

use crossterm::event::Event;
use tracing::{debug, trace};

use crate::engine::{Container, Element};
use crate::error::Result;
use crate::layout::{
    AttributeSet, FlowParams, LayoutParams, MarginParams, MeasureSpec, MeasuredDimension,
    MeasuredState, MIN_HEIGHT, MIN_WIDTH, PADDING, child_measure_spec, resolve_size_and_state,
};
use crate::types::{DisplayMetrics, Frame, Insets, PixelSize, ZERO_INSETS, horizontal, vertical};

// =============================================================================
// PROPS
// =============================================================================

/// Configuration for a [`FlowContainer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowProps {
    /// Optional container ID, shown in logs.
    pub id: Option<String>,

    /// Inner spacing between the container's edges and its children.
    pub padding: Insets,

    /// Minimum width hint; the measured width never goes below it
    /// (the incoming spec still has the last word).
    pub min_width: i32,

    /// Minimum height hint.
    pub min_height: i32,
}

impl Default for FlowProps {
    fn default() -> Self {
        Self {
            id: None,
            padding: ZERO_INSETS,
            min_width: 0,
            min_height: 0,
        }
    }
}

impl FlowProps {
    /// Read the container's own markup attributes: the `padding*` family,
    /// `minWidth` and `minHeight`. Anything else is ignored.
    pub fn from_attributes(attrs: &AttributeSet, metrics: &DisplayMetrics) -> Result<Self> {
        Ok(Self {
            id: attrs.get("id").map(str::to_string),
            padding: attrs.edges(PADDING, metrics)?,
            min_width: attrs.dimension(MIN_WIDTH, metrics)?.unwrap_or(0),
            min_height: attrs.dimension(MIN_HEIGHT, metrics)?.unwrap_or(0),
        })
    }
}

// =============================================================================
// PLACEMENT
// =============================================================================

/// What the last layout pass did with a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Laid out at this frame, in container coordinates.
    Placed(Frame),
    /// Did not fit; left wherever an earlier pass put it.
    Skipped,
}

struct Child {
    element: Box<dyn Element>,
    params: FlowParams,
    placement: Option<Placement>,
}

impl Child {
    fn label(&self) -> &str {
        self.element.name().unwrap_or("<anonymous>")
    }
}

// =============================================================================
// FLOW CONTAINER
// =============================================================================

pub struct FlowContainer {
    id: Option<String>,
    padding: Insets,
    min_size: PixelSize,
    children: Vec<Child>,
    measured: (MeasuredDimension, MeasuredDimension),
    frame: Option<Frame>,
    frame_changed: bool,
}

impl FlowContainer {
    pub fn new(props: FlowProps) -> Self {
        Self {
            id: props.id,
            padding: props.padding,
            min_size: PixelSize {
                width: props.min_width,
                height: props.min_height,
            },
            children: Vec::new(),
            measured: (MeasuredDimension::default(), MeasuredDimension::default()),
            frame: None,
            frame_changed: false,
        }
    }

    /// Build a container from its own markup attributes.
    pub fn from_attributes(attrs: &AttributeSet, metrics: &DisplayMetrics) -> Result<Self> {
        FlowProps::from_attributes(attrs, metrics).map(Self::new)
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Append a child. Params go through [`Container::adopt_params`].
    pub fn add_child(&mut self, element: impl Element + 'static, params: Option<LayoutParams>) {
        self.add_child_at(self.children.len(), element, params);
    }

    /// Insert a child at `index`; an index past the end appends.
    pub fn add_child_at(&mut self, index: usize, element: impl Element + 'static, params: Option<LayoutParams>) {
        let params = self.adopt_params(params);
        let index = index.min(self.children.len());
        self.children.insert(
            index,
            Child {
                element: Box::new(element),
                params,
                placement: None,
            },
        );
    }

    /// Append a child whose params come from markup attributes.
    pub fn add_child_with_attributes(
        &mut self,
        element: impl Element + 'static,
        attrs: &AttributeSet,
        metrics: &DisplayMetrics,
    ) -> Result<()> {
        let params = self.generate_params_from_attributes(attrs, metrics)?;
        self.add_child(element, Some(params.into()));
        Ok(())
    }

    /// Detach and return the child at `index`.
    pub fn remove_child(&mut self, index: usize) -> Option<Box<dyn Element>> {
        (index < self.children.len()).then(|| self.children.remove(index).element)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn child(&self, index: usize) -> Option<&dyn Element> {
        self.children.get(index).map(|child| child.element.as_ref())
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut (dyn Element + 'static)> {
        self.children.get_mut(index).map(|child| child.element.as_mut())
    }

    pub fn child_params(&self, index: usize) -> Option<&FlowParams> {
        self.children.get(index).map(|child| &child.params)
    }

    /// Replace a child's params, converting them if needed.
    ///
    /// Returns `false` if there is no child at `index`.
    pub fn set_child_params(&mut self, index: usize, params: LayoutParams) -> bool {
        let params = self.adopt_params(Some(params));
        match self.children.get_mut(index) {
            Some(child) => {
                child.params = params;
                true
            }
            None => false,
        }
    }

    /// Outcome of the last layout pass for the child at `index`.
    ///
    /// `None` if the child does not exist or has not been through a layout
    /// pass yet.
    pub fn placement(&self, index: usize) -> Option<Placement> {
        self.children.get(index).and_then(|child| child.placement)
    }

    /// Outcome of the last layout pass for every child, in order.
    pub fn placements(&self) -> Vec<Option<Placement>> {
        self.children.iter().map(|child| child.placement).collect()
    }

    // =========================================================================
    // Props
    // =========================================================================

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub fn min_size(&self) -> PixelSize {
        self.min_size
    }

    pub fn set_min_size(&mut self, width: i32, height: i32) {
        self.min_size = PixelSize { width, height };
    }

    /// Whether the frame given to the last `layout` differed from the one
    /// before it. The first pass always counts as a change.
    pub fn frame_changed(&self) -> bool {
        self.frame_changed
    }

    /// Measured width and height without state bits.
    pub fn measured_size(&self) -> PixelSize {
        PixelSize {
            width: self.measured.0.size,
            height: self.measured.1.size,
        }
    }

    // =========================================================================
    // Passes
    // =========================================================================

    /// Position children inside `frame`, in the container's own coordinates.
    ///
    /// `changed` is whether the container's frame differs from the last pass;
    /// the flow is recomputed either way.
    pub fn on_layout(&mut self, changed: bool, frame: Frame) {
        let padding = self.padding;
        let mut cursor = padding.left;
        let right_bound = frame.width().saturating_sub(padding.right);
        let mut skipped = 0usize;

        for (index, child) in self.children.iter_mut().enumerate() {
            let margins = child.params.margins;

            let left = cursor.saturating_add(margins.left);
            let top = padding.top.saturating_add(margins.top);
            let right = left.saturating_add(child.element.measured_width().size);
            let bottom = top.saturating_add(child.element.measured_height().size);

            if right > right_bound {
                trace!(index, child = child.label(), right, right_bound, "child overflows, skipped");
                child.placement = Some(Placement::Skipped);
                skipped += 1;
                continue;
            }

            let child_frame = Frame::new(left, top, right, bottom);
            trace!(index, child = child.label(), ?child_frame, "child placed");
            child.element.layout(child_frame);
            child.placement = Some(Placement::Placed(child_frame));
            cursor = right.saturating_add(margins.right);
        }

        debug!(
            container = self.id.as_deref().unwrap_or("flow"),
            changed,
            ?frame,
            children = self.children.len(),
            skipped,
            "flow layout"
        );
    }
}

/// Measure one child against the parent's specs, with its margins and the
/// already-used space taken out of what is available.
fn measure_child_with_margins(
    child: &mut Child,
    padding: &Insets,
    width_spec: MeasureSpec,
    width_used: i32,
    height_spec: MeasureSpec,
    height_used: i32,
) {
    let margins = &child.params.margins;
    let child_width_spec = child_measure_spec(
        width_spec,
        horizontal(padding).saturating_add(horizontal(margins)).saturating_add(width_used),
        child.params.width,
    );
    let child_height_spec = child_measure_spec(
        height_spec,
        vertical(padding).saturating_add(vertical(margins)).saturating_add(height_used),
        child.params.height,
    );
    child.element.measure(child_width_spec, child_height_spec);
}

impl Element for FlowContainer {
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) {
        let padding = self.padding;
        let mut total_width: i32 = 0;
        let mut max_height: i32 = 0;
        let mut child_state = MeasuredState::empty();

        for child in &mut self.children {
            // Every child sees the whole width; overflow is the layout pass's call.
            measure_child_with_margins(child, &padding, width_spec, 0, height_spec, 0);

            let margins = child.params.margins;
            total_width = total_width
                .saturating_add(child.element.measured_width().size)
                .saturating_add(horizontal(&margins));
            max_height = max_height.max(child.element.measured_height().size.saturating_add(vertical(&margins)));
            child_state = child_state.combine(child.element.measured_state());
        }

        total_width = total_width.saturating_add(horizontal(&padding));
        max_height = max_height.saturating_add(vertical(&padding));

        total_width = total_width.max(self.min_size.width);
        max_height = max_height.max(self.min_size.height);

        self.measured = (
            resolve_size_and_state(total_width, width_spec, child_state),
            resolve_size_and_state(max_height, height_spec, child_state.height_state()),
        );

        debug!(
            container = self.id.as_deref().unwrap_or("flow"),
            ?width_spec,
            ?height_spec,
            width = self.measured.0.size,
            height = self.measured.1.size,
            state = ?self.measured_state(),
            "flow measure"
        );
    }

    fn measured_width(&self) -> MeasuredDimension {
        self.measured.0
    }

    fn measured_height(&self) -> MeasuredDimension {
        self.measured.1
    }

    fn layout(&mut self, frame: Frame) {
        let changed = self.frame != Some(frame);
        self.frame = Some(frame);
        self.frame_changed = changed;
        self.on_layout(changed, frame);
    }

    fn frame(&self) -> Option<Frame> {
        self.frame
    }

    fn name(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Container for FlowContainer {
    type Params = FlowParams;

    fn generate_default_params(&self) -> FlowParams {
        FlowParams::wrap()
    }

    fn generate_params_from_attributes(&self, attrs: &AttributeSet, metrics: &DisplayMetrics) -> Result<FlowParams> {
        MarginParams::from_attributes(attrs, metrics).map(FlowParams::from)
    }

    fn generate_params(&self, params: &LayoutParams) -> FlowParams {
        FlowParams::coerce(params)
    }

    fn check_params(&self, params: &LayoutParams) -> bool {
        params.is_flow()
    }

    fn on_intercept_event(&mut self, event: &Event) -> bool {
        debug!(container = self.id.as_deref().unwrap_or("flow"), ?event, "intercept event");
        false
    }

    fn on_handle_event(&mut self, event: &Event) -> bool {
        debug!(container = self.id.as_deref().unwrap_or("flow"), ?event, "handle event");
        false
    }
}

impl fmt::Debug for FlowContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowContainer")
            .field("id", &self.id)
            .field("padding", &self.padding)
            .field("min_size", &self.min_size)
            .field("children", &self.children.len())
            .field("measured", &self.measured)
            .field("frame", &self.frame)
            .field("frame_changed", &self.frame_changed)
            .finish()
    }
}
