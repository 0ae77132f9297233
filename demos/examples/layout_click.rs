// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout → render → dispatch, end to end.
//!
//! Builds a small panel with a title bar and a text-sized button, lays it out
//! against a 300×200 surface, paints it onto a logging surface, and then
//! clicks the button.
//!
//! Run:
//! - `cargo run -p lightbox_demos --example layout_click`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use lightbox_dispatch::dispatch;
use lightbox_event::{EventKind, PointerEvent};
use lightbox_layout::{LayoutCx, MonospaceMeasure, layout_tree};
use lightbox_render::{Surface, render_tree};
use lightbox_tree::{Dim, Node, Size};

/// Surface that just logs the paint calls it receives.
struct LoggingSurface;

impl Surface for LoggingSurface {
    fn fill_rect(&mut self, rect: Rect, color: &str) {
        println!("fill   {rect:?} {color}");
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f64, color: &str) {
        println!("stroke {rect:?} {color} ({line_width}px)");
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: &str, color: &str) {
        println!("text   {text:?} at {origin:?} {font} {color}");
    }
}

fn main() {
    // Title bar across the top of the panel.
    let mut title = Node::new();
    title.top = Some(Dim::Px(0.0));
    title.height = Some(Size::px(24.0));
    title.background_color = Some("#224".into());
    title.color = Some("#fff".into());
    title.text = Some("Lightbox".into());
    title.padding = 4.0;

    // Button sized from its label, parked in the bottom-right corner.
    let mut button = Node::new();
    button.right = Some(Dim::Px(10.0));
    button.bottom = Some(Dim::Px(10.0));
    button.width = Some(Size::FromText);
    button.text = Some("OK".into());
    button.padding = 6.0;
    button.background_color = Some("#484".into());
    button.border_color = Some("#262".into());
    button.border_width = 1.0;

    let clicked = Rc::new(Cell::new(false));
    let flag = Rc::clone(&clicked);
    button.add_listener(EventKind::Click, move |ev| {
        flag.set(true);
        ev.stop_propagation();
    });

    let mut root = Node::new();
    root.padding = 10.0;
    root.background_color = Some("#eee".into());
    root.add_listener(EventKind::Click, |_| println!("root saw the click"));
    root.children.push(title);
    root.children.push(button);

    let measure = MonospaceMeasure::default();
    let cx = LayoutCx::new(&measure);
    let surface_rect = Rect::new(0.0, 0.0, 300.0, 200.0);

    layout_tree(&cx, &mut root, surface_rect);
    render_tree(&cx, &mut LoggingSurface, &root);

    // Click the middle of the button.
    let target = root.children[1].rect.center();
    println!("\nclick at {target:?}");
    let mut ev = PointerEvent::new(EventKind::Click, target);
    dispatch(&mut root, &mut ev);

    // The button handler stopped propagation, so the root handler stayed quiet.
    println!("button clicked: {}", clicked.get());
}
