//! Naming and catalog-record composition engine for bedding product lines.
//!
//! This crate derives everything a product registration needs from one
//! validated form:
//!
//! - **Reference**: static catalogs of sizes, colors, brands, variation
//!   specs and weight tables
//! - **Naming**: mattress descriptions and combinatorial kit expansion
//! - **Sequence**: per-run sequential code allocation
//! - **Barcode**: checksum-validated EAN-13 style codes
//! - **Record**: flat, order-preserving ERP catalog records
//!
//! # Example
//!
//! ```rust,ignore
//! use bedding_catalog::prelude::*;
//!
//! let form: ProductForm = toml::from_str(&input)?;
//! form.validate()?;
//!
//! let mattresses = compose_mattress_names(&form);
//! let expansion = compose_kit_names(&form, &mattresses);
//!
//! let mut allocator = SequenceAllocator::new(form.starting_sequence);
//! let records = assemble_records(&form, &mattresses, &expansion.kits, &mut allocator);
//! // allocator.current() seeds the next run
//! ```

pub mod barcode;
pub mod error;
pub mod form;
pub mod ids;
pub mod naming;
pub mod record;
pub mod reference;
pub mod sequence;

pub use error::CatalogError;
pub use form::{AuxiliarySelection, ProductForm};
pub use ids::*;
pub use record::{assemble_records, CatalogRecord, FieldValue};
pub use sequence::SequenceAllocator;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::form::{AuxiliarySelection, ProductForm};
    pub use crate::ids::*;

    // Reference data
    pub use crate::reference::{
        MattressCore, PillowOption, ProductKind, Size, VariationCategory, VariationSpec,
    };

    // Naming
    pub use crate::naming::{
        base_description, compose_kit_names, compose_mattress_names, ExpansionWarning,
        KitExpansion, KitName, MattressName,
    };

    // Codes and records
    pub use crate::barcode::{ean13, is_valid};
    pub use crate::record::{assemble_records, CatalogRecord, FieldValue, EXPORT_COLUMNS};
    pub use crate::sequence::SequenceAllocator;
}
