//src/model/mod.rs
pub mod species;
pub mod structure;

// Re-exports for cleaner imports
pub use species::Species;
pub use structure::{Atom, Bond, SiteKey, StructureModel};
