// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lightbox Layout: constraint resolution and recursive tree layout.
//!
//! Layout turns a sparse set of per-node edge/size hints into one fully
//! determined rectangle per node, in a single top-down pass:
//!
//! - [`resolve_rect`] resolves one node against its parent's rectangle:
//!   declared edges offset inward, sizes resolve against the parent extents
//!   (or from measured text), missing edges are back-filled from the opposite
//!   edge plus the size, and anything still open defaults to filling the
//!   parent on that axis.
//! - [`layout_tree`] applies [`resolve_rect`] pre-order over the whole tree,
//!   handing each child the node's rectangle inset by its padding. There is no
//!   caching; every invocation re-resolves the full tree, and re-running it on
//!   an unchanged tree is idempotent.
//!
//! Both take a [`LayoutCx`]: the text-measurement collaborator plus the
//! default font descriptor. The core holds no state of its own — the root and
//! the surface rectangle are passed explicitly on every call.
//!
//! ## Example
//!
//! ```
//! use kurbo::Rect;
//! use lightbox_layout::{LayoutCx, MonospaceMeasure, layout_tree};
//! use lightbox_tree::{Dim, Node, Size};
//!
//! let mut child = Node::new();
//! child.right = Some(Dim::Px(10.0));
//! child.bottom = Some(Dim::Px(10.0));
//! child.width = Some(Size::px(50.0));
//! child.height = Some(Size::px(20.0));
//!
//! let mut root = Node::new();
//! root.left = Some(Dim::Px(0.0));
//! root.top = Some(Dim::Px(0.0));
//! root.width = Some(Size::px(300.0));
//! root.height = Some(Size::px(200.0));
//! root.children.push(child);
//!
//! let measure = MonospaceMeasure::default();
//! let cx = LayoutCx::new(&measure);
//! layout_tree(&cx, &mut root, Rect::new(0.0, 0.0, 300.0, 200.0));
//!
//! assert_eq!(root.children[0].rect, Rect::new(240.0, 170.0, 290.0, 190.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod measure;

pub use layout::{LayoutCx, layout_tree, resolve_rect};
pub use measure::{DEFAULT_FONT, DEFAULT_TEXT_HEIGHT, MonospaceMeasure, TextMeasure, TextMetrics};
