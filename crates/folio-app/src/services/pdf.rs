//! Page-to-PDF conversion service
//!
//! The conversion library is an optional page collaborator. The trait
//! exposes an explicit readiness signal instead of the source's fixed
//! pre-conversion delay: `ready()` resolves once the library's own
//! asynchronous initialization finished, and resolves `false` when the
//! library never arrived. The shipped [`UnavailableConverter`] models the
//! latter, which is what routes clicks into the native-print fallback.

use folio_core::prelude::*;
use serde::Serialize;

/// Page orientation for the generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Raster options for the intermediate page capture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasOptions {
    pub scale: f64,
    pub use_cors: bool,
    pub allow_taint: bool,
}

/// Full conversion configuration, mirrored from the page's fixed setup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfOptions {
    /// Page margins in inches: top, right, bottom, left
    pub margin_in: [f64; 4],
    pub filename: String,
    pub image_format: String,
    pub image_quality: f64,
    pub canvas: CanvasOptions,
    pub unit: String,
    pub page_format: String,
    pub orientation: Orientation,
    pub compress: bool,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            margin_in: [0.5, 0.5, 0.5, 0.5],
            filename: "portfolio.pdf".to_string(),
            image_format: "jpeg".to_string(),
            image_quality: 0.85,
            canvas: CanvasOptions {
                scale: 1.5,
                use_cors: true,
                allow_taint: true,
            },
            unit: "in".to_string(),
            page_format: "a4".to_string(),
            orientation: Orientation::Portrait,
            compress: true,
        }
    }
}

/// Page-to-PDF conversion operations
#[trait_variant::make(PdfConverter: Send)]
pub trait LocalPdfConverter {
    /// Resolves once the library finished its own initialization;
    /// `false` means the library is not present on the page.
    async fn ready(&self) -> bool;

    /// Convert the full rendered page and save the result.
    async fn render_page(&self, options: &PdfOptions) -> Result<()>;
}

/// The converter used when no conversion library is bound.
///
/// Never ready; rendering answers with [`Error::ConverterUnavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableConverter;

impl PdfConverter for UnavailableConverter {
    async fn ready(&self) -> bool {
        false
    }

    async fn render_page(&self, _options: &PdfOptions) -> Result<()> {
        Err(Error::ConverterUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_mirror_page_setup() {
        let options = PdfOptions::default();
        assert_eq!(options.margin_in, [0.5; 4]);
        assert_eq!(options.image_format, "jpeg");
        assert_eq!(options.image_quality, 0.85);
        assert_eq!(options.canvas.scale, 1.5);
        assert_eq!(options.page_format, "a4");
        assert_eq!(options.orientation, Orientation::Portrait);
        assert!(options.compress);
    }

    #[test]
    fn test_options_serialize_for_embedders() {
        let json = serde_json::to_value(PdfOptions::default()).unwrap();
        assert_eq!(json["orientation"], "portrait");
        assert_eq!(json["filename"], "portfolio.pdf");
    }
}
