//! Catalog error types.

use crate::ids::VariationId;
use crate::reference::Size;
use thiserror::Error;

/// Errors raised by form validation.
///
/// The composition engine itself assumes validated input and never
/// fails; lookup misses downstream resolve through documented fallbacks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Line name is missing.
    #[error("Line name is required")]
    MissingLineName,

    /// Brand code is missing.
    #[error("Brand code is required")]
    MissingBrand,

    /// Mattress color is missing.
    #[error("Mattress color is required")]
    MissingMattressColor,

    /// No mattress size selected.
    #[error("At least one size must be selected")]
    NoSizesSelected,

    /// Mattress height must be positive.
    #[error("Mattress height must be greater than zero")]
    InvalidHeight,

    /// A chosen size has no positive weight.
    #[error("Missing or non-positive weight for size {size}")]
    InvalidWeight { size: Size },

    /// A standard base was requested without base colors.
    #[error("Base colors are required when a standard base is selected")]
    MissingBaseColors,

    /// An auxiliary selection carries no colors.
    #[error("Auxiliary variation {variation_id} has no colors selected")]
    AuxiliaryWithoutColors { variation_id: VariationId },
}
