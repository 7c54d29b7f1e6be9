//! Component catalog loading and management for the PPh21 engine.
//!
//! The catalog maps component codes to the facts the calculator needs:
//! the `taxable` flag on earning components and the explicit tax-law
//! `role` on deduction components. Roles are fixed here, at load time;
//! the calculator never re-derives them from component names.
//!
//! # Example
//!
//! ```no_run
//! use pph21_engine::config::CatalogLoader;
//!
//! let catalog = CatalogLoader::load("./config/pph21").unwrap();
//! let component = catalog.get_component("gaji_pokok").unwrap();
//! println!("Taxable: {}", component.taxable);
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{ComponentCatalog, DeductionComponent, EarningComponent};
