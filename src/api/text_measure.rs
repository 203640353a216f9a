//! Text-measurement seam.
//!
//! The engine never touches real font rasterization; the host supplies an
//! implementation of [`TextMeasurer`] backed by its text stack. The
//! estimator below is deterministic and backend-independent, good enough
//! for tests and headless layout.

pub trait TextMeasurer {
    /// Pixel width of `text` at `font_size_px`.
    fn text_width(&self, text: &str, font_size_px: f64) -> f64;

    /// Pixel height of one line at `font_size_px`.
    fn text_height(&self, font_size_px: f64) -> f64;

    /// Truncates `text` with an ellipsis so it fits within `max_width_px`.
    fn tailor(&self, text: &str, font_size_px: f64, max_width_px: f64) -> String {
        if self.text_width(text, font_size_px) <= max_width_px {
            return text.to_owned();
        }

        let chars: Vec<char> = text.chars().collect();
        for keep in (0..chars.len()).rev() {
            let mut candidate: String = chars[..keep].iter().collect();
            candidate.push('\u{2026}');
            if self.text_width(&candidate, font_size_px) <= max_width_px {
                return candidate;
            }
        }
        "\u{2026}".to_owned()
    }
}

/// Deterministic width/height estimator with per-glyph-class advance units.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatingTextMeasurer;

impl TextMeasurer for EstimatingTextMeasurer {
    fn text_width(&self, text: &str, font_size_px: f64) -> f64 {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        units * font_size_px
    }

    fn text_height(&self, font_size_px: f64) -> f64 {
        font_size_px * 4.0 / 3.0
    }
}
