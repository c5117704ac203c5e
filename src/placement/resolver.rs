//! Viewport-aware positioning of floating panels
//!
//! Horizontal placement follows the requested alignment and is then clamped
//! into the viewport margins. Vertical placement follows the requested side;
//! bottom requests that overflow the viewport flip above the anchor when
//! there is more room there. Top requests are never flipped downwards.

use tracing::debug;

use super::config::PlacementConfig;
use super::types::{
    Align, ArrowEdge, ArrowPosition, PlacementRequest, PlacementResult, Side,
};

/// Resolve a placement with the default configuration
pub fn resolve(request: &PlacementRequest) -> PlacementResult {
    resolve_with_config(request, &PlacementConfig::default())
}

/// Resolve a placement request into final panel coordinates
///
/// Total: degenerate geometry produces defined (if unhelpful) coordinates.
pub fn resolve_with_config(request: &PlacementRequest, config: &PlacementConfig) -> PlacementResult {
    let left = clamp_horizontal(unclamped_left(request), request, config);

    let (top, flipped) = match request.hint.side {
        Side::Top => (top_side_top(request), false),
        Side::Bottom => {
            let below = bottom_side_top(request);
            if should_flip(below, request) {
                debug!(
                    "flipping {} above anchor: top={:.1} overflows viewport height {:.1}",
                    request.hint, below, request.viewport.height
                );
                (top_side_top(request), true)
            } else {
                (below, false)
            }
        }
    };

    let effective = if flipped {
        request.hint.flipped()
    } else {
        request.hint
    };

    let edge = match effective.side {
        Side::Top => ArrowEdge::Bottom,
        Side::Bottom => ArrowEdge::Top,
    };
    let arrow = ArrowPosition {
        left: request.anchor.left + request.anchor.width / 2.0 - left,
        edge,
        inset: config.arrow_inset,
    };

    PlacementResult {
        top,
        left,
        flipped,
        effective,
        arrow,
    }
}

fn unclamped_left(request: &PlacementRequest) -> f64 {
    let anchor = &request.anchor;
    let width = request.floating_size.width;
    let base = match request.hint.align {
        Align::Start => anchor.left,
        Align::End => anchor.left + anchor.width - width,
        Align::Center => anchor.left + (anchor.width - width) / 2.0,
    };
    base + request.scroll.x + request.offset.x
}

/// Only one clamp branch applies: an over-wide panel ends up at a negative left.
fn clamp_horizontal(left: f64, request: &PlacementRequest, config: &PlacementConfig) -> f64 {
    let margin = config.viewport_margin;
    let width = request.floating_size.width;
    let max_right = request.viewport.width - margin;

    if left < margin {
        debug!("clamping left {:.1} to margin {:.1}", left, margin);
        margin
    } else if left + width > max_right {
        let clamped = max_right - width;
        debug!("clamping left {:.1} to {:.1}", left, clamped);
        clamped
    } else {
        left
    }
}

fn top_side_top(request: &PlacementRequest) -> f64 {
    request.anchor.top - request.floating_size.height + request.scroll.y + request.offset.y
}

fn bottom_side_top(request: &PlacementRequest) -> f64 {
    request.anchor.bottom() + request.scroll.y + request.offset.y
}

fn should_flip(top: f64, request: &PlacementRequest) -> bool {
    let viewport_height = request.viewport.height;
    if top + request.floating_size.height <= viewport_height {
        return false;
    }
    let space_above = request.anchor.top;
    let space_below = viewport_height - request.anchor.bottom();
    space_above > space_below
}
