//! Service layer for the folio runtime
//!
//! This module provides the traits that stand between the controllers and
//! the page's external collaborators, plus the implementations shipped with
//! the crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Engine    │  dispatch(Message) → update → view sync
//! └──────┬───────┘
//!        │
//!   ┌────▼─────────────────────────────┐
//!   │             Services             │
//!   │  DomSurface  Transport  PdfConv. │
//!   └────┬──────────┬──────────┬──────┘
//!        │          │          │
//!    MemoryDom  HttpTransport  (embedder-bound)
//! ```
//!
//! ## Key Components
//!
//! - [`DomSurface`]: the minimal page surface the controllers read and write
//! - [`MemoryDom`]: in-memory surface for headless use and tests
//! - [`Transport`]: async form submission; [`HttpTransport`] over reqwest
//! - [`PdfConverter`]: async page-to-PDF conversion with a readiness signal;
//!   [`UnavailableConverter`] drives the native-print fallback path

mod dom;
mod pdf;
mod transport;

pub use dom::{AnchorRef, DomSurface, MemoryDom};
pub use pdf::{
    CanvasOptions, LocalPdfConverter, Orientation, PdfConverter, PdfOptions, UnavailableConverter,
};
pub use transport::{HttpTransport, LocalTransport, SubmitReceipt, Transport};
