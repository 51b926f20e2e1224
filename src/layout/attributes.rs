//! Markup Attributes
//!
//! Reading sizes and margins out of markup. Values are plain strings; the
//! unit suffix decides how they become pixels.
//!
//! # Units
//!
//! - `12px` or `12` - pixels
//! - `12dp` / `12dip` - density-independent pixels
//! - `12sp` - scale-independent pixels
//!
//! # Example
//!
//! ```
//! use flow_container::layout::{AttributeSet, MarginParams};
//! use flow_container::{DisplayMetrics, SizeRequest};
//!
//! let attrs = AttributeSet::parse(
//!     r#"android:layout_width="wrap_content" android:layout_height="48dp" android:layout_marginLeft="4dp""#,
//! ).unwrap();
//!
//! let params = MarginParams::from_attributes(&attrs, &DisplayMetrics::with_density(2.0)).unwrap();
//! assert_eq!(params.width, SizeRequest::WrapContent);
//! assert_eq!(params.height, SizeRequest::Exact(96));
//! assert_eq!(params.margins.left, 8);
//! ```

use crate::error::{AttributeError, Result};
use crate::layout::params::MarginParams;
use crate::types::{DisplayMetrics, Insets, SizeRequest, ZERO_INSETS};

pub const LAYOUT_WIDTH: &str = "layout_width";
pub const LAYOUT_HEIGHT: &str = "layout_height";
pub const LAYOUT_MARGIN: &str = "layout_margin";
pub const PADDING: &str = "padding";
pub const MIN_WIDTH: &str = "minWidth";
pub const MIN_HEIGHT: &str = "minHeight";

// =============================================================================
// ATTRIBUTE SET
// =============================================================================

/// Ordered `name -> value` attributes of one markup element.
///
/// Namespace prefixes (`android:`, `app:`) are dropped on insert. A name
/// set twice keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    entries: Vec<(String, String)>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `name="value"` pairs separated by whitespace.
    pub fn parse(markup: &str) -> Result<Self> {
        let mut attrs = Self::new();
        let mut rest = markup.trim_start();

        while !rest.is_empty() {
            let eq = rest
                .find('=')
                .ok_or_else(|| AttributeError::Malformed(snippet(rest)))?;
            let name = rest[..eq].trim();
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(AttributeError::Malformed(snippet(rest)));
            }

            let after_eq = rest[eq + 1..].trim_start();
            let quote = after_eq
                .chars()
                .next()
                .filter(|c| *c == '"' || *c == '\'')
                .ok_or_else(|| AttributeError::Malformed(snippet(rest)))?;
            let body = &after_eq[1..];
            let close = body
                .find(quote)
                .ok_or_else(|| AttributeError::Malformed(snippet(rest)))?;

            attrs.insert(name, &body[..close]);
            rest = body[close + 1..].trim_start();
        }

        Ok(attrs)
    }

    /// Set an attribute, replacing any earlier value.
    pub fn insert(&mut self, name: &str, value: &str) {
        let name = strip_namespace(name);
        self.entries.retain(|(existing, _)| existing != name);
        self.entries.push((name.to_string(), value.trim().to_string()));
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Read an optional dimension in pixels.
    pub fn dimension(&self, name: &str, metrics: &DisplayMetrics) -> Result<Option<i32>> {
        self.get(name)
            .map(|value| parse_dimension(name, value, metrics))
            .transpose()
    }

    /// Read a required size request.
    pub fn size_request(&self, name: &'static str, metrics: &DisplayMetrics) -> Result<SizeRequest> {
        let value = self.get(name).ok_or(AttributeError::Missing(name))?;
        parse_size_request(name, value, metrics)
    }

    /// Read the four edges of a box attribute family such as `padding` or
    /// `layout_margin`.
    ///
    /// `{prefix}` sets every edge and wins outright. Otherwise
    /// `{prefix}Horizontal` / `{prefix}Vertical` win over the single sides,
    /// and `{prefix}Start` / `{prefix}End` win over `Left` / `Right`.
    pub fn edges(&self, prefix: &str, metrics: &DisplayMetrics) -> Result<Insets> {
        let read = |suffix: &str| self.dimension(&format!("{prefix}{suffix}"), metrics);

        if let Some(all) = read("")? {
            return Ok(crate::types::uniform(all));
        }

        let mut edges = ZERO_INSETS;

        if let Some(horizontal) = read("Horizontal")? {
            edges.left = horizontal;
            edges.right = horizontal;
        } else {
            if let Some(left) = read("Start")?.or(read("Left")?) {
                edges.left = left;
            }
            if let Some(right) = read("End")?.or(read("Right")?) {
                edges.right = right;
            }
        }

        if let Some(vertical) = read("Vertical")? {
            edges.top = vertical;
            edges.bottom = vertical;
        } else {
            if let Some(top) = read("Top")? {
                edges.top = top;
            }
            if let Some(bottom) = read("Bottom")? {
                edges.bottom = bottom;
            }
        }

        Ok(edges)
    }
}

impl<N: AsRef<str>, V: AsRef<str>> FromIterator<(N, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name.as_ref(), value.as_ref());
        }
        attrs
    }
}

impl MarginParams {
    /// Read `layout_width`, `layout_height` and the `layout_margin*` family.
    pub fn from_attributes(attrs: &AttributeSet, metrics: &DisplayMetrics) -> Result<Self> {
        Ok(Self {
            width: attrs.size_request(LAYOUT_WIDTH, metrics)?,
            height: attrs.size_request(LAYOUT_HEIGHT, metrics)?,
            margins: attrs.edges(LAYOUT_MARGIN, metrics)?,
        })
    }
}

// =============================================================================
// VALUE PARSING
// =============================================================================

/// Parse a dimension such as `8dp` into whole pixels.
///
/// Rounds half away from zero. A non-zero value never collapses to zero.
pub fn parse_dimension(name: &str, value: &str, metrics: &DisplayMetrics) -> Result<i32> {
    let invalid = || AttributeError::InvalidDimension {
        name: name.to_string(),
        value: value.to_string(),
    };

    let value = value.trim();
    let split = value
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);

    let number: f32 = number.trim().parse().map_err(|_| invalid())?;
    if !number.is_finite() {
        return Err(invalid());
    }

    let factor = match unit {
        "" | "px" => 1.0,
        "dp" | "dip" => metrics.density,
        "sp" => metrics.scaled_density,
        _ => return Err(invalid()),
    };

    Ok(to_pixels(number, factor))
}

/// Parse `match_parent`, `fill_parent`, `wrap_content` or a non-negative
/// dimension.
pub fn parse_size_request(name: &str, value: &str, metrics: &DisplayMetrics) -> Result<SizeRequest> {
    match value.trim() {
        "match_parent" | "fill_parent" => Ok(SizeRequest::MatchParent),
        "wrap_content" => Ok(SizeRequest::WrapContent),
        other => match parse_dimension(name, other, metrics) {
            Ok(px) if px >= 0 => Ok(SizeRequest::Exact(px)),
            _ => Err(AttributeError::InvalidSizeRequest {
                name: name.to_string(),
                value: other.to_string(),
            }),
        },
    }
}

fn to_pixels(number: f32, factor: f32) -> i32 {
    let px = number * factor;
    let rounded = if px >= 0.0 { (px + 0.5) as i32 } else { (px - 0.5) as i32 };

    if rounded != 0 || number == 0.0 {
        rounded
    } else if number > 0.0 {
        1
    } else {
        -1
    }
}

fn strip_namespace(name: &str) -> &str {
    name.trim().rsplit(':').next().unwrap_or(name)
}

fn snippet(rest: &str) -> String {
    rest.chars().take(24).collect()
}
