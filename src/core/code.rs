//! Scannable code generation.
//!
//! Item names are rendered into QR codes and stored as SVG data URLs. Generation is
//! best-effort: a failure is logged and reported as [`CodeOutcome::Unavailable`], and
//! callers persist the item without a code instead of failing the request.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use qrcode::{QrCode, render::svg};
use tracing::warn;

const DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// Result of rendering a code for a piece of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeOutcome {
    /// Encoded payload ready to be stored on the item
    Generated(String),
    /// The text could not be encoded; the item carries no code
    Unavailable,
}

impl CodeOutcome {
    /// Converts the outcome into the optional column value stored on the item.
    #[must_use]
    pub fn into_payload(self) -> Option<String> {
        match self {
            Self::Generated(payload) => Some(payload),
            Self::Unavailable => None,
        }
    }
}

/// Turns a text label into a scannable payload.
///
/// Implementations must be pure: the same text always yields the same outcome.
pub trait CodeGenerator: Send + Sync {
    /// Renders `text`, never failing the caller.
    fn generate(&self, text: &str) -> CodeOutcome;
}

/// Renders QR codes as base64 SVG data URLs.
#[derive(Clone, Debug)]
pub struct QrCodeGenerator {
    min_dimension: u32,
}

impl QrCodeGenerator {
    /// Creates a generator whose images are at least `min_dimension` pixels square.
    #[must_use]
    pub const fn new(min_dimension: u32) -> Self {
        Self { min_dimension }
    }
}

impl Default for QrCodeGenerator {
    fn default() -> Self {
        Self::new(200)
    }
}

impl CodeGenerator for QrCodeGenerator {
    fn generate(&self, text: &str) -> CodeOutcome {
        match QrCode::new(text.as_bytes()) {
            Ok(code) => {
                let image = code
                    .render::<svg::Color<'_>>()
                    .min_dimensions(self.min_dimension, self.min_dimension)
                    .build();
                CodeOutcome::Generated(format!("{DATA_URL_PREFIX}{}", STANDARD.encode(image)))
            }
            Err(e) => {
                warn!("QR code generation failed for {} bytes of text: {}", text.len(), e);
                CodeOutcome::Unavailable
            }
        }
    }
}
