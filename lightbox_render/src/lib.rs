// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lightbox Render: walk a laid-out tree and paint it onto a [`Surface`].
//!
//! Rendering is a pure consumer of resolved rectangles — call
//! [`lightbox_layout::layout_tree`] first, then [`render_tree`] on the same
//! tree. Per node, in fixed order: background fill, border stroke, then text;
//! children follow in declared order. Nothing here mutates layout state.
//!
//! The [`Surface`] trait is the drawing collaborator. Paint state (fill
//! color, stroke color, line width, font) is folded into the call arguments
//! rather than held as mutable surface state, so implementations can be as
//! simple as a recording vector in tests or a thin shim over a real canvas.
//!
//! No clipping is applied: a child laid out beyond its parent's rectangle is
//! painted where its rectangle says. Hit testing in `lightbox_dispatch`
//! enforces ancestor containment regardless.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use kurbo::{Point, Rect};
use lightbox_layout::LayoutCx;
use lightbox_tree::Node;

/// Text color used when a node with text declares no `color`.
pub const DEFAULT_TEXT_COLOR: &str = "#000";

/// Imperative drawing collaborator.
///
/// Coordinates are in root-surface space, matching the resolved rectangles the
/// layout pass produced. Color strings pass through to the surface untouched;
/// the engine attaches no meaning to them.
pub trait Surface {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: &str);
    /// Stroke a rectangle's outline.
    fn stroke_rect(&mut self, rect: Rect, line_width: f64, color: &str);
    /// Draw a single run of text with its baseline at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, font: &str, color: &str);
}

/// Paint one node (background, border, text — in that order), then its
/// children in declared order.
///
/// The text baseline sits at `y0 + text_height + padding`, left-aligned at
/// `x0 + padding`, with the text height taken from the context's measurement
/// collaborator for the node's effective font.
pub fn render_tree(cx: &LayoutCx<'_>, surface: &mut dyn Surface, node: &Node) {
    paint_node(cx, surface, node);
    for child in &node.children {
        render_tree(cx, surface, child);
    }
}

fn paint_node(cx: &LayoutCx<'_>, surface: &mut dyn Surface, node: &Node) {
    if let Some(background) = &node.background_color {
        surface.fill_rect(node.rect, background);
    }

    if let Some(border) = &node.border_color {
        surface.stroke_rect(node.rect, node.border_width, border);
    }

    if let Some(text) = &node.text {
        let font = node.effective_font(cx.default_font());
        let text_height = cx.measure_text(text, font).height;
        let origin = Point::new(
            node.rect.x0 + node.padding,
            node.rect.y0 + text_height + node.padding,
        );
        let color = node.color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR);
        surface.fill_text(text, origin, font, color);
    }
}
