//! Kit expansion.
//!
//! Expands the requested base and auxiliary variations across colors and
//! eligible mattress sizes into fully described composite records. Every
//! filter that empties out contributes zero records; the engine never
//! fails for validated input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::form::ProductForm;
use crate::ids::{ColorCode, VariationId};
use crate::naming::composer::{base_description, normalize_whitespace, MattressName};
use crate::reference::{
    base_weight, color_label, variation_by_id, Size, VariationCategory, VariationSpec,
    CAMA_BOX_BAU_ID, CAMA_BOX_ID,
};

/// The composed name of one kit: a variation in one color on one size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KitName {
    pub variation_id: VariationId,
    /// Catalog display label of the variation.
    pub variation_label: String,
    pub color_label: String,
    pub color_code: ColorCode,
    pub base_height_cm: u32,
    /// Base height plus mattress height.
    pub total_height_cm: u32,
    pub auxiliary_label: Option<String>,
    pub size: Size,
    pub size_label: String,
    pub dimensions: String,
    /// Base weight plus mattress weight, in kilograms.
    pub total_weight_kg: f64,
    pub full_name: String,
}

/// A weight-table miss surfaced during expansion.
///
/// The kit still computes with base weight 0; the warning exists so the
/// miss is visible instead of silently flattening totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ExpansionWarning {
    /// A Base-category variation has no per-size weight registered.
    MissingBaseWeight { variation_id: VariationId, size: Size },
    /// An Auxiliary-category variation has no flat weight registered.
    MissingAuxiliaryWeight { variation_id: VariationId },
}

impl fmt::Display for ExpansionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpansionWarning::MissingBaseWeight { variation_id, size } => write!(
                f,
                "no base weight registered for variation '{variation_id}' in size {size}; kit weight uses 0"
            ),
            ExpansionWarning::MissingAuxiliaryWeight { variation_id } => write!(
                f,
                "no auxiliary weight registered for variation '{variation_id}'; kit weight uses 0"
            ),
        }
    }
}

/// The result of a kit expansion run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KitExpansion {
    pub kits: Vec<KitName>,
    pub warnings: Vec<ExpansionWarning>,
}

/// Expand every requested variation into kit names.
///
/// Ordering is deterministic: the standard box base first, then the
/// storage box base, then auxiliary variations in form order; within a
/// variation, colors iterate in the order supplied, and sizes in the
/// order of the mattress list.
pub fn compose_kit_names(form: &ProductForm, mattresses: &[MattressName]) -> KitExpansion {
    let mut expansion = KitExpansion {
        kits: Vec::new(),
        warnings: Vec::new(),
    };
    let description = base_description(form);

    if form.include_cama_box {
        if let Some(spec) = variation_by_id(CAMA_BOX_ID) {
            expand_variation(spec, &form.base_colors, &description, mattresses, &mut expansion);
        }
    }
    if form.include_cama_box_bau {
        if let Some(spec) = variation_by_id(CAMA_BOX_BAU_ID) {
            expand_variation(spec, &form.base_colors, &description, mattresses, &mut expansion);
        }
    }
    for selection in &form.auxiliary_variations {
        // Unknown ids are "nothing to generate", not errors.
        if let Some(spec) = variation_by_id(selection.variation_id.as_str()) {
            expand_variation(spec, &selection.colors, &description, mattresses, &mut expansion);
        }
    }

    expansion
}

fn expand_variation(
    spec: &VariationSpec,
    colors: &[ColorCode],
    description: &str,
    mattresses: &[MattressName],
    expansion: &mut KitExpansion,
) {
    if colors.is_empty() {
        return;
    }
    let eligible_colors: Vec<&ColorCode> = match spec.allowed_colors {
        Some(allowed) => colors
            .iter()
            .filter(|c| allowed.contains(&c.as_str()))
            .collect(),
        None => colors.iter().collect(),
    };
    if eligible_colors.is_empty() {
        return;
    }
    let eligible_mattresses: Vec<&MattressName> = if spec.requires_single_size {
        mattresses.iter().filter(|m| m.size.is_single()).collect()
    } else {
        mattresses.iter().collect()
    };
    if eligible_mattresses.is_empty() {
        return;
    }

    for color in eligible_colors {
        let color_text = color_label(color.as_str())
            .unwrap_or(color.as_str())
            .to_string();
        for mattress in &eligible_mattresses {
            let total_height = spec.height_cm + mattress.height_cm;
            let base = match base_weight(spec, mattress.size) {
                Some(weight) => weight,
                None => {
                    push_weight_warning(expansion, spec, mattress.size);
                    0.0
                }
            };
            let auxiliary_text = spec
                .auxiliary_label
                .map(|label| format!(" + {label}"))
                .unwrap_or_default();
            let full_name = normalize_whitespace(&format!(
                "{} com {}{} {} {}x{}cm - {}",
                spec.base_label,
                description,
                auxiliary_text,
                mattress.size_label,
                mattress.dimensions,
                total_height,
                color_text,
            ));
            expansion.kits.push(KitName {
                variation_id: VariationId::new(spec.id),
                variation_label: spec.label.to_string(),
                color_label: color_text.clone(),
                color_code: color.clone(),
                base_height_cm: spec.height_cm,
                total_height_cm: total_height,
                auxiliary_label: spec.auxiliary_label.map(str::to_string),
                size: mattress.size,
                size_label: mattress.size_label.clone(),
                dimensions: mattress.dimensions.clone(),
                total_weight_kg: base + mattress.weight_kg,
                full_name,
            });
        }
    }
}

fn push_weight_warning(expansion: &mut KitExpansion, spec: &VariationSpec, size: Size) {
    let warning = match spec.category {
        VariationCategory::Base => ExpansionWarning::MissingBaseWeight {
            variation_id: VariationId::new(spec.id),
            size,
        },
        VariationCategory::Auxiliary => ExpansionWarning::MissingAuxiliaryWeight {
            variation_id: VariationId::new(spec.id),
        },
    };
    if !expansion.warnings.contains(&warning) {
        expansion.warnings.push(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::tests::sample_form;
    use crate::form::AuxiliarySelection;
    use crate::naming::composer::compose_mattress_names;

    #[test]
    fn test_standard_base_expansion() {
        let mut form = sample_form();
        form.base_colors = vec![
            ColorCode::new("00"),
            ColorCode::new("01"),
            ColorCode::new("02"),
        ];
        let mattresses = compose_mattress_names(&form);
        let expansion = compose_kit_names(&form, &mattresses);

        // 2 sizes x 3 colors.
        assert_eq!(expansion.kits.len(), 6);
        assert!(expansion.warnings.is_empty());

        let first = &expansion.kits[0];
        assert_eq!(first.variation_id.as_str(), "cama-box");
        assert_eq!(first.color_label, "Preto");
        assert_eq!(first.total_height_cm, 39 + 30);
        assert_eq!(first.total_weight_kg, 22.1 + 18.5);
        assert_eq!(
            first.full_name,
            "Cama Box com Colchão de Molas Ensacadas Pillow Top Supreme da Gazin \
             Solteiro 88x188x69cm - Preto"
        );
    }

    #[test]
    fn test_expansion_ordering() {
        let mut form = sample_form();
        form.include_cama_box_bau = true;
        form.base_colors = vec![ColorCode::new("01"), ColorCode::new("02")];
        form.auxiliary_variations = vec![AuxiliarySelection {
            variation_id: VariationId::new("cama-box-aux-espuma"),
            colors: vec![ColorCode::new("01")],
        }];
        let mattresses = compose_mattress_names(&form);
        let kits = compose_kit_names(&form, &mattresses).kits;

        let ids: Vec<&str> = kits.iter().map(|k| k.variation_id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "cama-box",
                "cama-box",
                "cama-box",
                "cama-box",
                "cama-box-bau",
                "cama-box-bau",
                "cama-box-bau",
                "cama-box-bau",
                "cama-box-aux-espuma",
            ]
        );
        // Within a variation: color-major, then sizes in mattress order.
        assert_eq!(kits[0].color_code.as_str(), "01");
        assert_eq!(kits[0].size, Size::Solteiro);
        assert_eq!(kits[1].size, Size::Casal);
        assert_eq!(kits[2].color_code.as_str(), "02");
    }

    #[test]
    fn test_single_size_restriction() {
        let mut form = sample_form();
        form.include_cama_box = false;
        form.sizes = vec![Size::Queen, Size::King];
        form.weights =
            std::collections::HashMap::from([(Size::Queen, 30.0), (Size::King, 35.0)]);
        form.auxiliary_variations = vec![AuxiliarySelection {
            variation_id: VariationId::new("cama-box-aux-molas"),
            colors: vec![ColorCode::new("01")],
        }];
        let mattresses = compose_mattress_names(&form);
        let expansion = compose_kit_names(&form, &mattresses);
        assert!(expansion.kits.is_empty());
    }

    #[test]
    fn test_color_restriction() {
        let mut form = sample_form();
        form.include_cama_box = false;
        form.auxiliary_variations = vec![AuxiliarySelection {
            variation_id: VariationId::new("cama-box-aux-espuma"),
            colors: vec![ColorCode::new("01"), ColorCode::new("04")],
        }];
        let mattresses = compose_mattress_names(&form);
        let kits = compose_kit_names(&form, &mattresses).kits;

        // "04" is not permitted for this variation; only the single size
        // qualifies, so one kit remains.
        assert_eq!(kits.len(), 1);
        assert_eq!(kits[0].color_code.as_str(), "01");
        assert_eq!(kits[0].size, Size::Solteiro);
        assert_eq!(kits[0].total_height_cm, 49 + 30);
        assert_eq!(kits[0].total_weight_kg, 30.0 + 18.5);
        assert_eq!(kits[0].auxiliary_label.as_deref(), Some("Auxiliar de Espuma"));
        assert!(kits[0].full_name.contains("+ Auxiliar de Espuma"));
    }

    #[test]
    fn test_unknown_variation_is_skipped() {
        let mut form = sample_form();
        form.include_cama_box = false;
        form.auxiliary_variations = vec![AuxiliarySelection {
            variation_id: VariationId::new("cama-box-aux-agua"),
            colors: vec![ColorCode::new("01")],
        }];
        let mattresses = compose_mattress_names(&form);
        let expansion = compose_kit_names(&form, &mattresses);
        assert!(expansion.kits.is_empty());
        assert!(expansion.warnings.is_empty());
    }

    #[test]
    fn test_no_colors_yields_nothing() {
        let mut form = sample_form();
        form.include_cama_box = true;
        form.base_colors.clear();
        let mattresses = compose_mattress_names(&form);
        assert!(compose_kit_names(&form, &mattresses).kits.is_empty());
    }

    #[test]
    fn test_missing_weight_warns_once() {
        let spec = VariationSpec {
            id: "cama-box-king-size",
            label: "Cama Box King Size",
            base_label: "Cama Box",
            height_cm: 39,
            category: VariationCategory::Base,
            auxiliary_label: None,
            requires_single_size: false,
            allowed_colors: None,
        };
        let form = sample_form();
        let mattresses = compose_mattress_names(&form);
        let mut expansion = KitExpansion {
            kits: Vec::new(),
            warnings: Vec::new(),
        };
        let colors = vec![ColorCode::new("01"), ColorCode::new("02")];
        expand_variation(
            &spec,
            &colors,
            "Colchão de Espuma Teste da Gazin",
            &mattresses,
            &mut expansion,
        );

        // Kits still compute (with base weight 0), one warning per size.
        assert_eq!(expansion.kits.len(), 4);
        assert_eq!(expansion.kits[0].total_weight_kg, 18.5);
        assert_eq!(expansion.warnings.len(), 2);
        assert!(expansion
            .warnings
            .contains(&ExpansionWarning::MissingBaseWeight {
                variation_id: VariationId::new("cama-box-king-size"),
                size: Size::Solteiro,
            }));
    }
}
