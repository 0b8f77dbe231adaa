//! Static reference data.
//!
//! Sizes, colors, brands, variation specs and weight tables, loaded once
//! as const catalogs. Each catalog is an ordered table plus keyed lookup
//! functions.

mod brand;
mod color;
mod product;
mod size;
mod variation;
mod weights;

pub use brand::{brand_label, format_brand_code, BrandOption, BRANDS};
pub use color::{color_label, format_color_code, ColorOption, COLORS};
pub use product::{MattressCore, PillowOption, ProductKind};
pub use size::Size;
pub use variation::{
    auxiliary_variations, standard_variations, variation_by_id, VariationCategory, VariationSpec,
    CAMA_BOX_BAU_ID, CAMA_BOX_ID, VARIATIONS,
};
pub use weights::{auxiliary_weight, base_weight};
