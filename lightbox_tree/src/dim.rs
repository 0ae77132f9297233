// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constraint value types: absolute and percentage dimensions, and sizes that
//! may additionally be derived from text content.

/// A single layout dimension: an absolute length or a percentage of the
/// corresponding parent axis extent.
///
/// Percentages on `top`/`bottom`/`height` resolve against the parent's height;
/// on `left`/`right`/`width` against the parent's width. The axis choice is
/// made by the resolver; `Dim` itself only knows the parent extent it is
/// handed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Dim {
    /// Absolute length in surface units.
    Px(f64),
    /// Percentage of the parent extent (`Percent(50.0)` is half the parent).
    Percent(f64),
}

impl Dim {
    /// Resolve against a parent axis extent.
    ///
    /// ```
    /// use lightbox_tree::Dim;
    ///
    /// assert_eq!(Dim::parse("50%").resolve(200.0), 100.0);
    /// assert_eq!(Dim::Px(30.0).resolve(200.0), 30.0);
    /// ```
    pub fn resolve(self, parent_extent: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => p / 100.0 * parent_extent,
        }
    }

    /// Parse a raw constraint string: a trailing `%` makes a [`Dim::Percent`]
    /// of the leading numeric portion, anything else a [`Dim::Px`].
    ///
    /// Parsing is permissive by design: a value with no leading numeric
    /// portion yields `NaN`, which then propagates silently through resolved
    /// coordinates rather than being rejected.
    pub fn parse(s: &str) -> Self {
        match s.trim_end().strip_suffix('%') {
            Some(number) => Self::Percent(leading_number(number)),
            None => Self::Px(leading_number(s)),
        }
    }
}

impl From<f64> for Dim {
    fn from(v: f64) -> Self {
        Self::Px(v)
    }
}

impl From<&str> for Dim {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// A width or height request: a fixed [`Dim`], or derived from the node's
/// text content.
///
/// `FromText` replaces the original format's `"textWidth"`/`"textHeight"`
/// sentinel strings. When either axis requests it, the resolver measures the
/// node's text once and fills both axes from the measurement plus padding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Size {
    /// An explicitly declared dimension.
    Fixed(Dim),
    /// Measure the node's text (plus `2 × padding` per axis).
    FromText,
}

impl Size {
    /// An absolute size in surface units.
    pub const fn px(v: f64) -> Self {
        Self::Fixed(Dim::Px(v))
    }

    /// A percentage of the parent extent.
    pub const fn percent(p: f64) -> Self {
        Self::Fixed(Dim::Percent(p))
    }

    /// The fixed dimension, if this size is not text-derived.
    pub const fn fixed(self) -> Option<Dim> {
        match self {
            Self::Fixed(d) => Some(d),
            Self::FromText => None,
        }
    }
}

impl From<Dim> for Size {
    fn from(d: Dim) -> Self {
        Self::Fixed(d)
    }
}

impl From<f64> for Size {
    fn from(v: f64) -> Self {
        Self::Fixed(Dim::Px(v))
    }
}

/// Parse the leading numeric portion of `s` (optional sign, digits, at most
/// one decimal point). Returns `NaN` when no digits lead the string.
fn leading_number(s: &str) -> f64 {
    let s = s.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => end = i + 1,
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return f64::NAN;
    }
    s[..end].parse().unwrap_or(f64::NAN)
}
