//! Presentation model and page markup for slide-deck
//!
//! Everything here is DOM-free so the browser frontend and the host tools
//! share one definition of what a deck looks like and how it renders.

pub mod error;
pub mod lint;
pub mod markup;
pub mod model;
pub mod outline;
pub mod spy;

pub use error::LoadError;
pub use lint::{lint, Issue};
pub use model::{Badge, Card, ContentItem, Meta, Presentation, Scalar, Section};
pub use spy::{ScrollSpy, SectionBounds};
