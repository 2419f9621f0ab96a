//! Persona domain module.
//!
//! The four characters a user can pick to read their drawings. Personas are
//! fixed reference data; only the selection changes during a session.
//!
//! # Module Structure
//!
//! - `model`: `PersonaId` and the `Persona` display metadata
//! - `preset`: the built-in catalog
//! - `selection`: radio-style single selection
//!
//! # Usage
//!
//! ```
//! use maeum_core::persona::{PersonaId, PersonaSelection, catalog};
//!
//! assert_eq!(catalog().len(), 4);
//!
//! let mut selection = PersonaSelection::default();
//! selection.select(PersonaId::Pico);
//! assert_eq!(selection.selected(), Some(PersonaId::Pico));
//! ```

mod model;
mod preset;
mod selection;

// Re-export public API
pub use model::{Persona, PersonaId};
pub use preset::catalog;
pub use selection::PersonaSelection;
