// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lightbox Tree: the node model for the Lightbox layout engine.
//!
//! A [`Node`] is a tree element carrying:
//! - sparse layout constraints — optional edge offsets ([`Dim`]) and sizes
//!   ([`Size`], which adds text-derived sizing to the fixed dimensions),
//! - style fields consumed by the renderer (padding, font, colors, border,
//!   text),
//! - a resolved rectangle written by each layout pass (scratch state, not part
//!   of the node's identity),
//! - listener storage from [`lightbox_event`], so every node can register and
//!   receive events natively (no runtime capability patching).
//!
//! Nodes are plain data: callers build and own the tree, and the layout,
//! render, and dispatch passes in the sibling crates walk it. Children are
//! exclusively owned by their parent and keep their declared order.
//!
//! ## Example
//!
//! ```
//! use lightbox_tree::{Dim, Node, Size};
//!
//! let mut button = Node::new();
//! button.right = Some(Dim::Px(10.0));
//! button.bottom = Some(Dim::Percent(5.0));
//! button.width = Some(Size::FromText);
//! button.text = Some("OK".into());
//!
//! let mut root = Node::new();
//! root.padding = 8.0;
//! root.children.push(button);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dim;
mod node;

pub use dim::{Dim, Size};
pub use node::Node;
