//! Validated form input for a generation run.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::{BrandCode, ColorCode, VariationId};
use crate::reference::{MattressCore, PillowOption, ProductKind, Size};

/// One auxiliary variation requested by the form, with its colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuxiliarySelection {
    /// Catalog id of the variation (e.g., "cama-box-aux-espuma").
    pub variation_id: VariationId,
    /// Requested color codes, in the order kits should be generated.
    pub colors: Vec<ColorCode>,
}

/// The user selection a generation run derives everything from.
///
/// Validation mirrors the registration form; the engine applies only the
/// documented fallbacks on top (missing weight reads as 0, unknown
/// variation ids are skipped).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductForm {
    /// Kind of product being registered.
    #[serde(default)]
    pub product_kind: ProductKind,
    /// Mattress core material.
    pub mattress_core: MattressCore,
    /// Commercial line name (e.g., "Supreme").
    pub line_name: String,
    /// Brand code from the brand catalog.
    pub brand_code: BrandCode,
    /// Mattress color code.
    pub mattress_color: ColorCode,
    /// Chosen sizes, in generation order.
    pub sizes: Vec<Size>,
    /// Mattress height in centimeters.
    pub mattress_height_cm: u32,
    /// Pillow add-ons joined into the description.
    #[serde(default)]
    pub pillow_options: Vec<PillowOption>,
    /// Mattress weight in kilograms, per chosen size.
    #[serde(default)]
    pub weights: HashMap<Size, f64>,
    /// Generate kits for the standard box base.
    #[serde(default)]
    pub include_cama_box: bool,
    /// Generate kits for the standard storage box base.
    #[serde(default)]
    pub include_cama_box_bau: bool,
    /// Colors for the standard bases, in generation order.
    #[serde(default)]
    pub base_colors: Vec<ColorCode>,
    /// Auxiliary variations to expand, in generation order.
    #[serde(default)]
    pub auxiliary_variations: Vec<AuxiliarySelection>,
    /// Last sequential code issued by the previous run.
    #[serde(default)]
    pub starting_sequence: u64,
}

impl ProductForm {
    /// Validate the business rules the registration form enforces.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.line_name.trim().is_empty() {
            return Err(CatalogError::MissingLineName);
        }
        if self.brand_code.is_empty() {
            return Err(CatalogError::MissingBrand);
        }
        if self.mattress_color.is_empty() {
            return Err(CatalogError::MissingMattressColor);
        }
        if self.sizes.is_empty() {
            return Err(CatalogError::NoSizesSelected);
        }
        if self.mattress_height_cm == 0 {
            return Err(CatalogError::InvalidHeight);
        }
        for &size in &self.sizes {
            match self.weights.get(&size) {
                Some(&weight) if weight > 0.0 => {}
                _ => return Err(CatalogError::InvalidWeight { size }),
            }
        }
        if (self.include_cama_box || self.include_cama_box_bau) && self.base_colors.is_empty() {
            return Err(CatalogError::MissingBaseColors);
        }
        for selection in &self.auxiliary_variations {
            if selection.colors.is_empty() {
                return Err(CatalogError::AuxiliaryWithoutColors {
                    variation_id: selection.variation_id.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_form() -> ProductForm {
        ProductForm {
            product_kind: ProductKind::Colchao,
            mattress_core: MattressCore::MolasEnsacadas,
            line_name: "Supreme".to_string(),
            brand_code: BrandCode::new("0041"),
            mattress_color: ColorCode::new("01"),
            sizes: vec![Size::Solteiro, Size::Casal],
            mattress_height_cm: 30,
            pillow_options: vec![PillowOption::PillowTop],
            weights: HashMap::from([(Size::Solteiro, 18.5), (Size::Casal, 27.0)]),
            include_cama_box: true,
            include_cama_box_bau: false,
            base_colors: vec![ColorCode::new("01"), ColorCode::new("02")],
            auxiliary_variations: Vec::new(),
            starting_sequence: 0,
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(sample_form().validate(), Ok(()));
    }

    #[test]
    fn test_missing_weight() {
        let mut form = sample_form();
        form.weights.remove(&Size::Casal);
        assert_eq!(
            form.validate(),
            Err(CatalogError::InvalidWeight { size: Size::Casal })
        );

        form.weights.insert(Size::Casal, 0.0);
        assert_eq!(
            form.validate(),
            Err(CatalogError::InvalidWeight { size: Size::Casal })
        );
    }

    #[test]
    fn test_base_without_colors() {
        let mut form = sample_form();
        form.base_colors.clear();
        assert_eq!(form.validate(), Err(CatalogError::MissingBaseColors));

        form.include_cama_box = false;
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_auxiliary_without_colors() {
        let mut form = sample_form();
        form.auxiliary_variations.push(AuxiliarySelection {
            variation_id: VariationId::new("cama-box-aux-espuma"),
            colors: Vec::new(),
        });
        assert!(matches!(
            form.validate(),
            Err(CatalogError::AuxiliaryWithoutColors { .. })
        ));
    }

    #[test]
    fn test_empty_line_name() {
        let mut form = sample_form();
        form.line_name = "   ".to_string();
        assert_eq!(form.validate(), Err(CatalogError::MissingLineName));
    }
}
