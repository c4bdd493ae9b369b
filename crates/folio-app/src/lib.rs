//! folio-app - Page state and orchestration for the folio runtime
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! interactive behavior of the portfolio page: messages model every UI event,
//! a pure `update()` drives the widget state machines, `view::apply()`
//! synchronizes state back onto an abstract page surface, and the [`Engine`]
//! owns the loop plus the service traits for the external collaborators
//! (page surface, submission transport, PDF converter).

pub mod engine;
pub mod handler;
pub mod message;
pub mod observer;
pub mod page;
pub mod services;
pub mod state;
pub mod view;

// Re-export primary types
pub use engine::Engine;
pub use handler::{Task, UpdateAction, UpdateResult};
pub use message::Message;
pub use observer::{IntersectionEntry, ObserverConfig};
pub use page::{FormEndpoint, NavLink, PageRegistry, TabControl};
pub use services::{
    AnchorRef, DomSurface, HttpTransport, MemoryDom, PdfConverter, PdfOptions, SubmitReceipt,
    Transport, UnavailableConverter,
};
pub use state::AppState;
