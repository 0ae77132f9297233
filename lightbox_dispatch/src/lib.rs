// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lightbox Dispatch: hit-tested event dispatch with bubbling over a node
//! tree.
//!
//! [`dispatch`] walks the tree depth-first from an explicitly supplied root
//! (the core is stateless; there is no engine-held "current root"):
//!
//! - A node participates only if the event's position falls inside its
//!   resolved rectangle, bounds inclusive. A non-containing node is skipped
//!   together with its whole subtree — descendants laid out beyond an
//!   ancestor's rectangle never receive the event, regardless of where they
//!   were painted.
//! - Contained children are visited before the node's own handlers run, so
//!   the deepest contained node fires first and ancestors after: bubbling.
//! - The propagation-stop flag is checked once per node, after its children
//!   return and before any of its handlers run; once set, every remaining
//!   ancestor is skipped.
//! - Stop-immediate-propagation is scoped to one node's handler list (see
//!   [`lightbox_event::Listeners::dispatch`]).
//!
//! Touch-class events targeting the surface additionally get their default
//! platform gesture suppressed (the event's `default_prevented` flag; the
//! embedder reads it, dispatch itself ignores it).
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use lightbox_dispatch::dispatch;
//! use lightbox_event::{EventKind, PointerEvent};
//! use lightbox_tree::Node;
//!
//! let mut root = Node::new();
//! root.rect = Rect::new(0.0, 0.0, 100.0, 100.0);
//! root.add_listener(EventKind::Click, |ev| ev.prevent_default());
//!
//! let mut ev = PointerEvent::new(EventKind::Click, Point::new(50.0, 50.0));
//! dispatch(&mut root, &mut ev);
//! assert!(ev.is_default_prevented());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use lightbox_event::PointerEvent;
use lightbox_tree::Node;

/// Dispatch one event against a laid-out tree.
///
/// The tree must have been laid out (resolved rectangles populated) before
/// dispatch; an unresolved tree has zero-sized rectangles at the origin and
/// the event will simply miss.
///
/// Completes the whole visit before returning; handlers control propagation
/// solely through the flags on `event`.
pub fn dispatch(root: &mut Node, event: &mut PointerEvent) {
    // Keep touch events from performing default platform gestures.
    if event.surface_target && event.kind.is_touch() {
        event.prevent_default();
    }

    visit(root, event);
}

/// Depth-first visit: children of a contained node first, then — if
/// propagation has not been stopped — the node's own handlers.
fn visit(node: &mut Node, event: &mut PointerEvent) {
    if !node.contains(event.position) {
        return;
    }

    for child in &mut node.children {
        visit(child, event);
    }

    if event.is_propagation_stopped() {
        return;
    }

    node.listeners.dispatch(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::{Point, Rect};
    use lightbox_event::EventKind;
    use lightbox_layout::{LayoutCx, MonospaceMeasure, layout_tree};
    use lightbox_tree::{Dim, Size};

    type Log = Rc<RefCell<Vec<&'static str>>>;

    fn log_click(node: &mut Node, log: &Log, tag: &'static str) {
        let log = Rc::clone(log);
        node.add_listener(EventKind::Click, move |_| log.borrow_mut().push(tag));
    }

    /// root → child_a → child_b, all covering (50, 50) after layout.
    fn nested_tree(log: &Log) -> Node {
        let mut child_b = Node::new();
        child_b.left = Some(Dim::Px(10.0));
        child_b.top = Some(Dim::Px(10.0));
        child_b.width = Some(Size::px(60.0));
        child_b.height = Some(Size::px(60.0));
        log_click(&mut child_b, log, "b");

        let mut child_a = Node::new();
        child_a.left = Some(Dim::Px(20.0));
        child_a.top = Some(Dim::Px(20.0));
        child_a.width = Some(Size::px(100.0));
        child_a.height = Some(Size::px(100.0));
        log_click(&mut child_a, log, "a");
        child_a.children.push(child_b);

        let mut root = Node::new();
        log_click(&mut root, log, "root");
        root.children.push(child_a);

        let measure = MonospaceMeasure::default();
        layout_tree(
            &LayoutCx::new(&measure),
            &mut root,
            Rect::new(0.0, 0.0, 200.0, 200.0),
        );
        root
    }

    fn click_at(x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(EventKind::Click, Point::new(x, y))
    }

    #[test]
    fn deepest_contained_node_fires_first() {
        let log: Log = Rc::default();
        let mut root = nested_tree(&log);

        dispatch(&mut root, &mut click_at(50.0, 50.0));
        assert_eq!(*log.borrow(), ["b", "a", "root"]);
    }

    #[test]
    fn uncontained_subtree_is_skipped_entirely() {
        let log: Log = Rc::default();
        let mut root = nested_tree(&log);

        // Inside root, outside child_a (and therefore outside child_b too).
        dispatch(&mut root, &mut click_at(5.0, 5.0));
        assert_eq!(*log.borrow(), ["root"]);
    }

    #[test]
    fn child_outside_parent_bounds_never_fires() {
        let log: Log = Rc::default();

        // Child positioned past its parent's right edge; layout places it
        // there, but hit testing still requires ancestor containment.
        let mut child = Node::new();
        child.left = Some(Dim::Px(150.0));
        child.width = Some(Size::px(50.0));
        log_click(&mut child, &log, "child");

        let mut parent = Node::new();
        parent.width = Some(Size::px(100.0));
        parent.height = Some(Size::px(100.0));
        log_click(&mut parent, &log, "parent");
        parent.children.push(child);

        let measure = MonospaceMeasure::default();
        layout_tree(
            &LayoutCx::new(&measure),
            &mut parent,
            Rect::new(0.0, 0.0, 400.0, 100.0),
        );
        assert_eq!(parent.children[0].rect.x0, 150.0);

        dispatch(&mut parent, &mut click_at(160.0, 50.0));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn propagation_stop_suppresses_all_ancestors() {
        let log: Log = Rc::default();
        let mut root = nested_tree(&log);

        // An extra handler on the deepest node stops propagation.
        root.children[0].children[0]
            .add_listener(EventKind::Click, |ev| ev.stop_propagation());

        dispatch(&mut root, &mut click_at(50.0, 50.0));
        // b's own handlers all ran; a and root were both suppressed.
        assert_eq!(*log.borrow(), ["b"]);
    }

    #[test]
    fn propagation_stop_midway_suppresses_only_remaining_ancestors() {
        let log: Log = Rc::default();
        let mut root = nested_tree(&log);

        root.children[0].add_listener(EventKind::Click, |ev| ev.stop_propagation());

        dispatch(&mut root, &mut click_at(50.0, 50.0));
        assert_eq!(*log.borrow(), ["b", "a"]);
    }

    #[test]
    fn immediate_stop_skips_same_node_handlers_but_bubbles() {
        let log: Log = Rc::default();

        let mut child = Node::new();
        {
            let log = Rc::clone(&log);
            child.add_listener(EventKind::Click, move |ev| {
                log.borrow_mut().push("child first");
                ev.stop_immediate_propagation();
            });
        }
        log_click(&mut child, &log, "child second");

        let mut root = Node::new();
        log_click(&mut root, &log, "root");
        root.children.push(child);

        let measure = MonospaceMeasure::default();
        layout_tree(
            &LayoutCx::new(&measure),
            &mut root,
            Rect::new(0.0, 0.0, 100.0, 100.0),
        );

        dispatch(&mut root, &mut click_at(50.0, 50.0));
        // The second handler at the child is skipped; the ancestor still fires.
        assert_eq!(*log.borrow(), ["child first", "root"]);
    }

    #[test]
    fn touch_events_request_default_suppression() {
        let log: Log = Rc::default();
        let mut root = nested_tree(&log);

        let mut touch = PointerEvent::new(EventKind::TouchStart, Point::new(50.0, 50.0));
        dispatch(&mut root, &mut touch);
        assert!(touch.is_default_prevented());

        let mut click = click_at(50.0, 50.0);
        dispatch(&mut root, &mut click);
        assert!(!click.is_default_prevented());
    }

    #[test]
    fn non_surface_touch_keeps_default() {
        let log: Log = Rc::default();
        let mut root = nested_tree(&log);

        let mut touch = PointerEvent::new(EventKind::TouchMove, Point::new(50.0, 50.0));
        touch.surface_target = false;
        dispatch(&mut root, &mut touch);
        assert!(!touch.is_default_prevented());
    }

    #[test]
    fn handlers_only_fire_for_matching_kind() {
        let log: Log = Rc::default();
        let mut root = nested_tree(&log);

        dispatch(
            &mut root,
            &mut PointerEvent::new(EventKind::MouseMove, Point::new(50.0, 50.0)),
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn sibling_order_follows_declared_order() {
        let log: Log = Rc::default();

        // Two overlapping siblings covering the same point.
        let mut first = Node::new();
        log_click(&mut first, &log, "first");
        let mut second = Node::new();
        log_click(&mut second, &log, "second");

        let mut root = Node::new();
        root.children.push(first);
        root.children.push(second);

        let measure = MonospaceMeasure::default();
        layout_tree(
            &LayoutCx::new(&measure),
            &mut root,
            Rect::new(0.0, 0.0, 100.0, 100.0),
        );

        dispatch(&mut root, &mut click_at(50.0, 50.0));
        assert_eq!(*log.borrow(), ["first", "second"]);
    }

    #[test]
    fn event_on_unresolved_tree_misses() {
        let log: Log = Rc::default();
        let mut root = Node::new();
        log_click(&mut root, &log, "root");

        // No layout pass: rect is the default zero rect at the origin.
        dispatch(&mut root, &mut click_at(50.0, 50.0));
        assert!(log.borrow().is_empty());

        // The zero rect still contains its own corner (bounds are inclusive).
        dispatch(&mut root, &mut click_at(0.0, 0.0));
        assert_eq!(*log.borrow(), ["root"]);
    }
}
