use crate::{
    foundation::error::{RenderError, RenderResult},
    stream::model::DocStream,
};

/// Horizontal space available to the layout engine.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PageWidth {
    /// Lines are at most `width` columns, of which at most `ribbon * width` may be
    /// non-indentation text.
    AvailablePerLine {
        /// Maximum line width in columns.
        width: usize,
        /// Fraction of the width usable for content, in `(0, 1]`.
        ribbon: f64,
    },
    /// No width limit; groups are only broken by hard line breaks.
    Unbounded,
}

impl Default for PageWidth {
    fn default() -> Self {
        Self::AvailablePerLine {
            width: 80,
            ribbon: 1.0,
        }
    }
}

impl PageWidth {
    /// Columns of content allowed per line, or `None` when unbounded.
    pub fn ribbon_chars(self) -> Option<usize> {
        match self {
            Self::AvailablePerLine { width, ribbon } => {
                let chars = (width as f64 * ribbon).floor().max(0.0) as usize;
                Some(chars.min(width))
            }
            Self::Unbounded => None,
        }
    }
}

/// Parameters handed to the layout engine by the convenience entry points.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutOptions {
    /// Available width.
    #[serde(default)]
    pub page_width: PageWidth,
}

impl LayoutOptions {
    /// Options for a fixed width with a full ribbon.
    pub fn with_width(width: usize) -> Self {
        Self {
            page_width: PageWidth::AvailablePerLine { width, ribbon: 1.0 },
        }
    }

    /// Reject widths the layout engine cannot work with.
    pub fn validate(&self) -> RenderResult<()> {
        if let PageWidth::AvailablePerLine { width, ribbon } = self.page_width {
            if width == 0 {
                return Err(RenderError::validation("page width must be > 0"));
            }
            if !(ribbon > 0.0 && ribbon <= 1.0) {
                return Err(RenderError::validation(format!(
                    "ribbon fraction must be in (0, 1], got {ribbon}"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate options from JSON.
    pub fn from_json(json: &str) -> RenderResult<Self> {
        let opts: Self = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }
}

/// A document that a layout engine can turn into a [`DocStream`].
///
/// The layout algorithm itself lives outside this crate; implement this trait on your document
/// type to use it with [`crate::render_default`] and friends.
pub trait LayoutDoc {
    /// Annotation payload carried into the stream.
    type Ann;

    /// Lay the document out under `opts`.
    ///
    /// Must resolve every fallback; the returned stream should not contain `Fail`.
    fn layout(self, opts: &LayoutOptions) -> DocStream<Self::Ann>;
}

/// An already laid-out stream lays out to itself.
impl<A> LayoutDoc for DocStream<A> {
    type Ann = A;

    fn layout(self, _opts: &LayoutOptions) -> DocStream<A> {
        self
    }
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
