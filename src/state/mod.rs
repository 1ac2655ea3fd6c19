//! Explicit UI state models.
//!
//! DESIGN
//! ======
//! Everything the page "knows" lives here and is rendered into the document;
//! nothing is read back out of the tree to recover state. These modules are
//! browser-free so they test natively.

pub mod freshness;
pub mod rows;
pub mod table;
pub mod theme;
pub mod toast;
