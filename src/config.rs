//! Configuration for a resume generation run.
//!
//! Every knob lives in [`RenderConfig`], built through its
//! [`RenderConfigBuilder`]. One struct keeps the paths, the page geometry,
//! and the watch-mode debounce together, so two runs can be diffed by
//! logging a single value.
//!
//! Page geometry is deliberately configuration, not data: the layout is
//! fixed and nothing in the YAML source can move the margins.

use crate::error::ResumeError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// US-Letter width in PDF points (1 pt = 1/72 in).
pub const LETTER_WIDTH_PT: f32 = 612.0;
/// US-Letter height in PDF points.
pub const LETTER_HEIGHT_PT: f32 = 792.0;

/// Configuration for a generation run.
///
/// Built via [`RenderConfig::builder()`] or [`RenderConfig::default()`].
///
/// # Example
/// ```rust
/// use resume2pdf::RenderConfig;
///
/// let config = RenderConfig::builder()
///     .input("cv.yaml")
///     .html_output("cv.html")
///     .pdf_output("cv.pdf")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Path of the YAML source document. Default: `resume.yaml`.
    pub input: PathBuf,

    /// Destination of the markup artifact. Default: `resume.html`.
    pub html_output: PathBuf,

    /// Destination of the paginated artifact. Default: `resume.pdf`.
    pub pdf_output: PathBuf,

    /// Page width in points. Default: US Letter (612 pt).
    pub page_width_pt: f32,

    /// Page height in points. Default: US Letter (792 pt).
    pub page_height_pt: f32,

    /// Top and bottom page margin in points. Default: 36 pt (0.5 in).
    pub margin_vertical_pt: f32,

    /// Left and right page margin in points. Default: 54 pt (0.75 in).
    pub margin_horizontal_pt: f32,

    /// Body text size in points. Default: 10 pt.
    ///
    /// Headings and the name line are derived from this in the pagination
    /// module, so one knob scales the whole document consistently.
    pub font_size_pt: f32,

    /// Watch mode: notifications arriving within this window of the previous
    /// accepted one are discarded, coalescing editor auto-save bursts into a
    /// single regeneration. Default: 500 ms.
    pub debounce_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("resume.yaml"),
            html_output: PathBuf::from("resume.html"),
            pdf_output: PathBuf::from("resume.pdf"),
            page_width_pt: LETTER_WIDTH_PT,
            page_height_pt: LETTER_HEIGHT_PT,
            margin_vertical_pt: 36.0,
            margin_horizontal_pt: 54.0,
            font_size_pt: 10.0,
            debounce_ms: 500,
        }
    }
}

impl RenderConfig {
    /// Create a new builder for `RenderConfig`.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder {
            config: Self::default(),
        }
    }

    /// Usable text width between the horizontal margins, in points.
    pub fn content_width_pt(&self) -> f32 {
        self.page_width_pt - 2.0 * self.margin_horizontal_pt
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input = path.into();
        self
    }

    pub fn html_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.html_output = path.into();
        self
    }

    pub fn pdf_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pdf_output = path.into();
        self
    }

    pub fn page_size_pt(mut self, width: f32, height: f32) -> Self {
        self.config.page_width_pt = width;
        self.config.page_height_pt = height;
        self
    }

    pub fn margins_pt(mut self, vertical: f32, horizontal: f32) -> Self {
        self.config.margin_vertical_pt = vertical;
        self.config.margin_horizontal_pt = horizontal;
        self
    }

    pub fn font_size_pt(mut self, size: f32) -> Self {
        self.config.font_size_pt = size.clamp(6.0, 24.0);
        self
    }

    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.config.debounce_ms = ms;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<RenderConfig, ResumeError> {
        let c = &self.config;
        if c.page_width_pt <= 0.0 || c.page_height_pt <= 0.0 {
            return Err(ResumeError::InvalidConfig(format!(
                "page size must be positive, got {}x{} pt",
                c.page_width_pt, c.page_height_pt
            )));
        }
        if c.content_width_pt() <= 0.0
            || c.page_height_pt - 2.0 * c.margin_vertical_pt <= 0.0
        {
            return Err(ResumeError::InvalidConfig(
                "margins leave no room for content".into(),
            ));
        }
        if c.html_output == c.pdf_output {
            return Err(ResumeError::InvalidConfig(
                "HTML and PDF outputs must be distinct paths".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_layout() {
        let c = RenderConfig::default();
        assert_eq!(c.input, PathBuf::from("resume.yaml"));
        assert_eq!(c.html_output, PathBuf::from("resume.html"));
        assert_eq!(c.pdf_output, PathBuf::from("resume.pdf"));
        assert_eq!(c.page_width_pt, 612.0);
        assert_eq!(c.page_height_pt, 792.0);
        assert_eq!(c.debounce_ms, 500);
    }

    #[test]
    fn content_width_subtracts_both_margins() {
        let c = RenderConfig::default();
        assert_eq!(c.content_width_pt(), 612.0 - 108.0);
    }

    #[test]
    fn oversized_margins_rejected() {
        let err = RenderConfig::builder()
            .margins_pt(400.0, 400.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ResumeError::InvalidConfig(_)));
    }

    #[test]
    fn colliding_outputs_rejected() {
        let err = RenderConfig::builder()
            .html_output("out.doc")
            .pdf_output("out.doc")
            .build()
            .unwrap_err();
        assert!(matches!(err, ResumeError::InvalidConfig(_)));
    }
}
