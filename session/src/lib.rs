//! FILENAME: session/src/lib.rs
//! PURPOSE: The caller-side state layer over the pure engines.
//!
//! A `CatalogueSession` owns the record set, the facet catalog, the filter
//! criteria, and the report parameters. The presentation layer calls the
//! mutation operations here and re-reads the derived views (`products`,
//! `chips`, `report`) after every change; it never holds engine state of
//! its own.

pub mod chips;
pub mod error;
pub mod session;

pub use chips::{build_chips, ChipKind, FilterChip};
pub use error::SessionError;
pub use session::{CatalogueSession, SortDirection, SortSpec};
