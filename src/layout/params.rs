//! Layout Params
//!
//! Per-child sizing requests and margins, in the three shapes a host toolkit
//! hands around:
//!
//! - [`BaseParams`] - width and height only
//! - [`MarginParams`] - width, height and four margins
//! - [`FlowParams`] - the flow container's own params
//!
//! [`LayoutParams`] is the tagged union the host passes to a container. A
//! container checks the tag before trusting it and converts anything else
//! into its own type; nothing here ever assumes a cast succeeds.

use crate::types::{Insets, SizeRequest, ZERO_INSETS};

/// Width and height requests with no margin information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseParams {
    pub width: SizeRequest,
    pub height: SizeRequest,
}

impl BaseParams {
    pub const fn new(width: SizeRequest, height: SizeRequest) -> Self {
        Self { width, height }
    }
}

/// Width and height requests plus margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarginParams {
    pub width: SizeRequest,
    pub height: SizeRequest,
    pub margins: Insets,
}

impl MarginParams {
    pub const fn new(width: SizeRequest, height: SizeRequest, margins: Insets) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }
}

/// Params of a child of a [`FlowContainer`](crate::FlowContainer).
///
/// Same fields as [`MarginParams`]; a distinct type so the container can
/// tell its own params from ones built for another parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowParams {
    pub width: SizeRequest,
    pub height: SizeRequest,
    pub margins: Insets,
}

impl FlowParams {
    /// Params with no margins.
    pub const fn new(width: SizeRequest, height: SizeRequest) -> Self {
        Self {
            width,
            height,
            margins: ZERO_INSETS,
        }
    }

    /// `wrap_content` on both axes, no margins.
    pub const fn wrap() -> Self {
        Self::new(SizeRequest::WrapContent, SizeRequest::WrapContent)
    }

    /// Replace the margins.
    pub const fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    /// Build flow params from any host params.
    ///
    /// Margins are copied when the donor carries them and default to zero
    /// otherwise.
    pub fn coerce(params: &LayoutParams) -> Self {
        match params {
            LayoutParams::Flow(flow) => *flow,
            LayoutParams::Margin(margin) => Self {
                width: margin.width,
                height: margin.height,
                margins: margin.margins,
            },
            LayoutParams::Base(base) => Self::new(base.width, base.height),
        }
    }
}

impl Default for FlowParams {
    fn default() -> Self {
        Self::wrap()
    }
}

impl From<MarginParams> for FlowParams {
    fn from(params: MarginParams) -> Self {
        Self::coerce(&LayoutParams::Margin(params))
    }
}

impl From<BaseParams> for FlowParams {
    fn from(params: BaseParams) -> Self {
        Self::coerce(&LayoutParams::Base(params))
    }
}

/// Params as the host hands them over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutParams {
    Base(BaseParams),
    Margin(MarginParams),
    Flow(FlowParams),
}

impl LayoutParams {
    /// True when these are already a flow container's params.
    #[inline]
    pub fn is_flow(&self) -> bool {
        matches!(self, Self::Flow(_))
    }

    pub fn width(&self) -> SizeRequest {
        match self {
            Self::Base(p) => p.width,
            Self::Margin(p) => p.width,
            Self::Flow(p) => p.width,
        }
    }

    pub fn height(&self) -> SizeRequest {
        match self {
            Self::Base(p) => p.height,
            Self::Margin(p) => p.height,
            Self::Flow(p) => p.height,
        }
    }

    /// Margins, if this variant has any.
    pub fn margins(&self) -> Option<Insets> {
        match self {
            Self::Base(_) => None,
            Self::Margin(p) => Some(p.margins),
            Self::Flow(p) => Some(p.margins),
        }
    }
}

impl From<BaseParams> for LayoutParams {
    fn from(params: BaseParams) -> Self {
        Self::Base(params)
    }
}

impl From<MarginParams> for LayoutParams {
    fn from(params: MarginParams) -> Self {
        Self::Margin(params)
    }
}

impl From<FlowParams> for LayoutParams {
    fn from(params: FlowParams) -> Self {
        Self::Flow(params)
    }
}

/// Downcast: succeeds only for the `Flow` variant and hands the params back
/// untouched otherwise.
impl TryFrom<LayoutParams> for FlowParams {
    type Error = LayoutParams;

    fn try_from(params: LayoutParams) -> Result<Self, Self::Error> {
        match params {
            LayoutParams::Flow(flow) => Ok(flow),
            other => Err(other),
        }
    }
}
