// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constraint resolution and the recursive layout pass.

use kurbo::Rect;
use lightbox_tree::{Node, Size};

use crate::measure::{DEFAULT_FONT, TextMeasure, TextMetrics};

/// Tree-walk context for layout (and text placement during rendering): the
/// measurement collaborator and the default font descriptor.
///
/// Construction requires a [`TextMeasure`], so a tree that requests
/// text-derived sizing can never find the capability missing at resolve time.
#[derive(Copy, Clone)]
pub struct LayoutCx<'a> {
    measure: &'a dyn TextMeasure,
    default_font: &'a str,
}

impl core::fmt::Debug for LayoutCx<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayoutCx")
            .field("default_font", &self.default_font)
            .finish_non_exhaustive()
    }
}

impl<'a> LayoutCx<'a> {
    /// Create a context with the default font descriptor
    /// ([`DEFAULT_FONT`]).
    pub fn new(measure: &'a dyn TextMeasure) -> Self {
        Self {
            measure,
            default_font: DEFAULT_FONT,
        }
    }

    /// Override the default font descriptor.
    pub fn with_default_font(mut self, font: &'a str) -> Self {
        self.default_font = font;
        self
    }

    /// The font used for nodes that declare none.
    pub fn default_font(&self) -> &'a str {
        self.default_font
    }

    /// Measure a run of text via the context's collaborator.
    pub fn measure_text(&self, text: &str, font: &str) -> TextMetrics {
        self.measure.measure(text, font)
    }
}

/// Resolve one node's rectangle against its parent's resolved rectangle.
///
/// The candidate rectangle starts equal to the parent's. Then, in order:
/// declared edges offset inward (percentages against the matching parent axis
/// extent), width/height resolve (from text measurement plus `2 × padding`
/// when requested), absent edges are back-filled from the opposite edge and
/// the resolved size, and any edge still untouched keeps its parent-aligned
/// value — an unconstrained axis fills the parent.
///
/// Declared edges always win: back-fill only triggers for an absent edge, so
/// when both opposing edges and a size are present the size is silently
/// ignored. Contradictory or malformed constraints produce degenerate or
/// `NaN` rectangles rather than errors.
pub fn resolve_rect(cx: &LayoutCx<'_>, node: &Node, parent: Rect) -> Rect {
    let parent_width = parent.x1 - parent.x0;
    let parent_height = parent.y1 - parent.y0;

    let mut x0 = parent.x0;
    let mut y0 = parent.y0;
    let mut x1 = parent.x1;
    let mut y1 = parent.y1;

    // Declared edges first.
    if let Some(top) = node.top {
        y0 += top.resolve(parent_height);
    }
    if let Some(left) = node.left {
        x0 += left.resolve(parent_width);
    }
    if let Some(bottom) = node.bottom {
        y1 -= bottom.resolve(parent_height);
    }
    if let Some(right) = node.right {
        x1 -= right.resolve(parent_width);
    }

    let (width, height) = resolve_size(cx, node, parent_width, parent_height);

    // Back-fill absent edges from the opposite edge plus the resolved size;
    // top/left before bottom/right.
    if node.top.is_none()
        && node.bottom.is_some()
        && let Some(h) = height
    {
        y0 = y1 - h;
    }
    if node.left.is_none()
        && node.right.is_some()
        && let Some(w) = width
    {
        x0 = x1 - w;
    }
    if node.bottom.is_none()
        && let Some(h) = height
    {
        y1 = y0 + h;
    }
    if node.right.is_none()
        && let Some(w) = width
    {
        x1 = x0 + w;
    }

    Rect::new(x0, y0, x1, y1)
}

/// Resolve the node's width/height requests, if any.
///
/// Text-derived sizing is all-or-nothing: if either axis requests it, one
/// measurement fills both axes (plus `2 × padding` each); with no text, both
/// are zero.
fn resolve_size(
    cx: &LayoutCx<'_>,
    node: &Node,
    parent_width: f64,
    parent_height: f64,
) -> (Option<f64>, Option<f64>) {
    let from_text =
        node.width == Some(Size::FromText) || node.height == Some(Size::FromText);
    if from_text {
        let Some(text) = &node.text else {
            return (Some(0.0), Some(0.0));
        };
        let metrics = cx.measure_text(text, node.effective_font(cx.default_font));
        let pad = node.padding * 2.0;
        return (Some(metrics.width + pad), Some(metrics.height + pad));
    }

    let fixed = |size: Option<Size>, extent: f64| {
        size.and_then(Size::fixed).map(|d| d.resolve(extent))
    };
    (
        fixed(node.width, parent_width),
        fixed(node.height, parent_height),
    )
}

/// Lay out a whole tree against a surface rectangle.
///
/// Pre-order: the node's rectangle is resolved and stored before any child is
/// visited; each child is then laid out against the node's rectangle inset by
/// its padding. Siblings are independent and keep their declared order.
pub fn layout_tree(cx: &LayoutCx<'_>, node: &mut Node, parent: Rect) {
    node.rect = resolve_rect(cx, node, parent);
    let inner = node.content_rect();
    for child in &mut node.children {
        layout_tree(cx, child, inner);
    }
}
