// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree node: constraints, style, resolved rectangle, children, listeners.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};
use lightbox_event::{EventKind, Listeners, PointerEvent};

use crate::dim::{Dim, Size};

/// A tree element with layout constraints, style, optional text, and children.
///
/// All constraint fields are optional; the resolver fills whatever is missing
/// from the parent rectangle (default-to-fill) or by back-filling from the
/// opposite edge and a resolved size. `rect` is scratch output, overwritten by
/// every layout pass.
///
/// Unlike the original dynamic format, event capability is not patched onto
/// nodes at runtime: every node owns a [`Listeners`] map, and registering the
/// first handler is what allocates storage.
#[derive(Debug, Default)]
pub struct Node {
    /// Ordered children, exclusively owned.
    pub children: Vec<Node>,

    /// Offset of the top edge from the parent's top edge.
    pub top: Option<Dim>,
    /// Offset of the left edge from the parent's left edge.
    pub left: Option<Dim>,
    /// Offset of the bottom edge from the parent's bottom edge (inward).
    pub bottom: Option<Dim>,
    /// Offset of the right edge from the parent's right edge (inward).
    pub right: Option<Dim>,
    /// Width request; `None` falls back to back-fill or filling the parent.
    pub width: Option<Size>,
    /// Height request; `None` falls back to back-fill or filling the parent.
    pub height: Option<Size>,

    /// Uniform padding on all four sides. Insets the children's parent
    /// rectangle and pads text-derived sizes and text placement.
    pub padding: f64,
    /// Font descriptor for text measurement and rendering; `None` uses the
    /// layout context's default font.
    pub font: Option<String>,
    /// Text color.
    pub color: Option<String>,
    /// Background fill color; `None` paints no background.
    pub background_color: Option<String>,
    /// Border stroke color; `None` paints no border.
    pub border_color: Option<String>,
    /// Border stroke width, used only when `border_color` is set.
    pub border_width: f64,
    /// Text content.
    pub text: Option<String>,

    /// Resolved rectangle in root-surface coordinates, written by the layout
    /// pass and read by the renderer and the dispatcher.
    pub rect: Rect,

    /// Event handler registrations for this node.
    pub listeners: Listeners,
}

impl Node {
    /// Create an unconstrained, unstyled node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler on this node; convenience for
    /// [`Listeners::add`].
    pub fn add_listener(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&mut PointerEvent) + 'static,
    ) {
        self.listeners.add(kind, listener);
    }

    /// Whether `point` falls within this node's resolved rectangle, bounds
    /// inclusive.
    ///
    /// A degenerate rectangle (from contradictory or `NaN` constraints)
    /// contains nothing; the comparisons simply fail.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.rect.x0
            && point.x <= self.rect.x1
            && point.y >= self.rect.y0
            && point.y <= self.rect.y1
    }

    /// The rectangle children are laid out against: the resolved rectangle
    /// shrunk by `padding` on all four sides.
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.rect.x0 + self.padding,
            self.rect.y0 + self.padding,
            self.rect.x1 - self.padding,
            self.rect.y1 - self.padding,
        )
    }

    /// The font used for this node's text: its own, or the supplied default.
    pub fn effective_font<'a>(&'a self, default_font: &'a str) -> &'a str {
        self.font.as_deref().unwrap_or(default_font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn contains_is_inclusive_of_all_edges() {
        let mut node = Node::new();
        node.rect = Rect::new(10.0, 20.0, 110.0, 120.0);

        assert!(node.contains(Point::new(10.0, 20.0)));
        assert!(node.contains(Point::new(110.0, 120.0)));
        assert!(node.contains(Point::new(60.0, 70.0)));
        assert!(!node.contains(Point::new(9.9, 70.0)));
        assert!(!node.contains(Point::new(60.0, 120.1)));
    }

    #[test]
    fn degenerate_rect_contains_nothing() {
        let mut node = Node::new();
        node.rect = Rect::new(f64::NAN, 0.0, f64::NAN, 10.0);
        assert!(!node.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn content_rect_insets_by_padding() {
        let mut node = Node::new();
        node.padding = 10.0;
        node.rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(node.content_rect(), Rect::new(10.0, 10.0, 90.0, 90.0));
    }

    #[test]
    fn effective_font_prefers_own_font() {
        let mut node = Node::new();
        assert_eq!(node.effective_font("12pt Helvetica"), "12pt Helvetica");
        node.font = Some("9pt Courier".to_string());
        assert_eq!(node.effective_font("12pt Helvetica"), "9pt Courier");
    }

    #[test]
    fn add_listener_registers_on_this_node() {
        let mut node = Node::new();
        node.add_listener(EventKind::Click, |_| {});
        assert_eq!(node.listeners.len(EventKind::Click), 1);
    }
}
