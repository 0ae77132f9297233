// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement: the external collaborator interface and a simple
//! reference implementation.

/// Measured extent of a run of text.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the text in surface units.
    pub width: f64,
    /// Line height of the text in surface units.
    pub height: f64,
}

/// Default font descriptor used when a node declares none.
pub const DEFAULT_FONT: &str = "12pt Helvetica";

/// Fallback line height, in surface units, for measurers without precise
/// font metrics.
pub const DEFAULT_TEXT_HEIGHT: f64 = 12.0;

/// Font-metrics collaborator: measures text in a given font.
///
/// The engine calls this but does not implement font metrics itself. An
/// implementation backed by a real text stack should return the true advance
/// width and line height; one without precise vertical metrics should report
/// [`DEFAULT_TEXT_HEIGHT`].
pub trait TextMeasure {
    /// Measure `text` as a single run in `font`.
    fn measure(&self, text: &str, font: &str) -> TextMetrics;
}

/// Fixed-advance measurer: every character is `advance` wide, every run is
/// `line_height` tall, regardless of font.
///
/// Good enough for tests, demos, and terminal-like surfaces; not a substitute
/// for real font metrics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonospaceMeasure {
    /// Width of one character.
    pub advance: f64,
    /// Height of a text run.
    pub line_height: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            advance: 8.0,
            line_height: DEFAULT_TEXT_HEIGHT,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, _font: &str) -> TextMetrics {
        let width = text.chars().count() as f64 * self.advance;
        TextMetrics {
            width,
            height: self.line_height,
        }
    }
}
