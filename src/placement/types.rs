//! Core types for the placement resolver

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::PlacementError;

/// A rectangle in viewport-relative pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A horizontal/vertical displacement, used for both caller offsets and scroll position
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// Which side of the anchor the floating panel sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    Top,
    #[default]
    Bottom,
}

/// Horizontal alignment of the floating panel against the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// The caller's preferred side and alignment before collision adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct PlacementHint {
    pub side: Side,
    pub align: Align,
}

impl PlacementHint {
    /// Every accepted spelling of a placement hint
    pub const NAMES: [&'static str; 6] = [
        "bottom-start",
        "bottom-end",
        "bottom",
        "top-start",
        "top-end",
        "top",
    ];

    pub fn new(side: Side, align: Align) -> Self {
        Self { side, align }
    }

    /// The same alignment on the opposite vertical side
    pub fn flipped(self) -> Self {
        let side = match self.side {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        };
        Self { side, ..self }
    }
}

impl Default for PlacementHint {
    fn default() -> Self {
        Self::new(Side::Bottom, Align::Start)
    }
}

impl FromStr for PlacementHint {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (side, align) = match s.split_once('-') {
            Some((side, align)) => (side, Some(align)),
            None => (s, None),
        };

        let side = match side {
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            _ => return Err(PlacementError::unknown_hint(s, &Self::NAMES)),
        };
        let align = match align {
            None => Align::Center,
            Some("start") => Align::Start,
            Some("end") => Align::End,
            Some(_) => return Err(PlacementError::unknown_hint(s, &Self::NAMES)),
        };

        Ok(Self { side, align })
    }
}

impl TryFrom<String> for PlacementHint {
    type Error = PlacementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for PlacementHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            Side::Top => "top",
            Side::Bottom => "bottom",
        };
        match self.align {
            Align::Start => write!(f, "{}-start", side),
            Align::Center => write!(f, "{}", side),
            Align::End => write!(f, "{}-end", side),
        }
    }
}

/// Everything needed to position one floating panel
///
/// The floating size must already be measured; the resolver never measures.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlacementRequest {
    pub anchor: Rect,
    #[serde(rename = "floating")]
    pub floating_size: Size,
    #[serde(default)]
    pub hint: PlacementHint,
    #[serde(default)]
    pub offset: Offset,
    pub viewport: Size,
    #[serde(default)]
    pub scroll: Offset,
}

impl PlacementRequest {
    /// Create a request with the default hint, no offset and no scroll
    pub fn new(anchor: Rect, floating_size: Size, viewport: Size) -> Self {
        Self {
            anchor,
            floating_size,
            hint: PlacementHint::default(),
            offset: Offset::zero(),
            viewport,
            scroll: Offset::zero(),
        }
    }

    pub fn with_hint(mut self, hint: PlacementHint) -> Self {
        self.hint = hint;
        self
    }

    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_scroll(mut self, scroll: Offset) -> Self {
        self.scroll = scroll;
        self
    }
}

/// Panel edge the arrow indicator is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowEdge {
    /// Arrow above the panel, pointing up at an anchor above it
    Top,
    /// Arrow below the panel, pointing down at an anchor below it
    Bottom,
}

impl fmt::Display for ArrowEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrowEdge::Top => write!(f, "top"),
            ArrowEdge::Bottom => write!(f, "bottom"),
        }
    }
}

/// Where a directional arrow should be drawn on the floating panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPosition {
    /// Arrow tip x, relative to the panel's left edge
    pub left: f64,
    pub edge: ArrowEdge,
    /// Distance the arrow protrudes past `edge`
    pub inset: f64,
}

/// Final position of a floating panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementResult {
    pub top: f64,
    pub left: f64,
    /// True when a bottom request was moved above the anchor
    pub flipped: bool,
    /// The placement actually used after flipping
    pub effective: PlacementHint,
    pub arrow: ArrowPosition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right(), 50.0);
        assert_eq!(rect.bottom(), 50.0);
    }

    #[test]
    fn test_parse_all_hints() {
        for name in PlacementHint::NAMES {
            let hint: PlacementHint = name.parse().expect("Should parse");
            assert_eq!(hint.to_string(), name);
        }
    }

    #[test]
    fn test_parse_center_hint() {
        let hint: PlacementHint = "top".parse().unwrap();
        assert_eq!(hint, PlacementHint::new(Side::Top, Align::Center));
    }

    #[test]
    fn test_parse_unknown_hint() {
        assert!("left-start".parse::<PlacementHint>().is_err());
        assert!("bottom-middle".parse::<PlacementHint>().is_err());
        assert!("".parse::<PlacementHint>().is_err());
    }

    #[test]
    fn test_default_hint_is_bottom_start() {
        assert_eq!(PlacementHint::default().to_string(), "bottom-start");
    }

    #[test]
    fn test_flipped_keeps_alignment() {
        let hint: PlacementHint = "bottom-end".parse().unwrap();
        assert_eq!(hint.flipped().to_string(), "top-end");
        assert_eq!(hint.flipped().flipped(), hint);
    }

    #[test]
    fn test_request_from_toml() {
        let request: PlacementRequest = toml::from_str(
            r#"
            hint = "top-end"
            anchor = { top = 100.0, left = 20.0, width = 80.0, height = 30.0 }
            floating = { width = 200.0, height = 150.0 }
            viewport = { width = 1024.0, height = 768.0 }
            "#,
        )
        .expect("Should deserialize");

        assert_eq!(request.hint.to_string(), "top-end");
        assert_eq!(request.floating_size, Size::new(200.0, 150.0));
        assert_eq!(request.offset, Offset::zero());
        assert_eq!(request.scroll, Offset::zero());
    }

    #[test]
    fn test_request_rejects_bad_hint() {
        let result: Result<PlacementRequest, _> = toml::from_str(
            r#"
            hint = "sideways"
            anchor = { top = 0.0, left = 0.0, width = 1.0, height = 1.0 }
            floating = { width = 1.0, height = 1.0 }
            viewport = { width = 10.0, height = 10.0 }
            "#,
        );
        assert!(result.is_err());
    }
}
