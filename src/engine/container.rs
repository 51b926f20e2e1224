//! Container - extension points a composite element overrides.
//!
//! The host's generic child-insertion path never builds params itself. It
//! asks the parent container:
//!
//! - no params at all -> [`Container::generate_default_params`]
//! - params the parent recognises -> used as-is
//! - anything else -> [`Container::generate_params`]
//!
//! [`Container::adopt_params`] runs that sequence. Markup inflation goes
//! through [`Container::generate_params_from_attributes`] instead.
//!
//! Input events are offered to the container first through
//! [`Container::on_intercept_event`] and then, if nothing below consumed
//! them, through [`Container::on_handle_event`]. Both default to "not mine".

use crossterm::event::Event;

use crate::error::Result;
use crate::layout::{AttributeSet, LayoutParams};
use crate::types::DisplayMetrics;

use super::element::Element;

pub trait Container: Element {
    /// The params type this container stores for each child.
    type Params: TryFrom<LayoutParams, Error = LayoutParams>;

    /// Params for a child added without any.
    fn generate_default_params(&self) -> Self::Params;

    /// Params read from a child's markup attributes.
    fn generate_params_from_attributes(&self, attrs: &AttributeSet, metrics: &DisplayMetrics) -> Result<Self::Params>;

    /// Params derived from ones built for some other parent.
    fn generate_params(&self, params: &LayoutParams) -> Self::Params;

    /// Whether `params` are already this container's own type.
    fn check_params(&self, params: &LayoutParams) -> bool;

    /// Turn whatever params a child arrives with into this container's type.
    fn adopt_params(&self, params: Option<LayoutParams>) -> Self::Params {
        match params {
            None => self.generate_default_params(),
            Some(params) if self.check_params(&params) => {
                Self::Params::try_from(params).unwrap_or_else(|params| self.generate_params(&params))
            }
            Some(params) => self.generate_params(&params),
        }
    }

    /// Return `true` to steal an event from the children.
    fn on_intercept_event(&mut self, _event: &Event) -> bool {
        false
    }

    /// Return `true` if the event was consumed.
    fn on_handle_event(&mut self, _event: &Event) -> bool {
        false
    }
}
