//! Mattress description composition.

use serde::{Deserialize, Serialize};

use crate::form::ProductForm;
use crate::ids::ColorCode;
use crate::reference::{brand_label, color_label, ProductKind, Size};

/// Collapse whitespace runs and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The base description shared by every name derived from a form:
/// `"Colchão de <core> <pillows> <line> da <brand>"`.
///
/// Descriptions always open with the mattress label; an unknown brand
/// code falls back to the raw code.
pub fn base_description(form: &ProductForm) -> String {
    let pillows = form
        .pillow_options
        .iter()
        .map(|p| p.text())
        .collect::<Vec<_>>()
        .join(" ");
    let brand = brand_label(form.brand_code.as_str()).unwrap_or(form.brand_code.as_str());
    normalize_whitespace(&format!(
        "{} de {} {} {} da {}",
        ProductKind::Colchao.label(),
        form.mattress_core.label(),
        pillows,
        form.line_name,
        brand,
    ))
}

/// The composed name of one mattress variant, by size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MattressName {
    pub size: Size,
    pub size_label: String,
    /// `width x length` in centimeters.
    pub dimensions: String,
    pub height_cm: u32,
    pub color_label: String,
    pub color_code: ColorCode,
    /// Mattress weight in kilograms; 0 when the form carries no entry.
    pub weight_kg: f64,
    pub full_name: String,
}

/// Compose one mattress name per chosen size, in form order.
pub fn compose_mattress_names(form: &ProductForm) -> Vec<MattressName> {
    let description = base_description(form);
    let color = color_label(form.mattress_color.as_str())
        .unwrap_or(form.mattress_color.as_str())
        .to_string();

    form.sizes
        .iter()
        .map(|&size| {
            let weight = form.weights.get(&size).copied().unwrap_or(0.0);
            let full_name = normalize_whitespace(&format!(
                "{} {} {}x{}cm - {}",
                description,
                size.label(),
                size.dimensions(),
                form.mattress_height_cm,
                color,
            ));
            MattressName {
                size,
                size_label: size.label().to_string(),
                dimensions: size.dimensions().to_string(),
                height_cm: form.mattress_height_cm,
                color_label: color.clone(),
                color_code: form.mattress_color.clone(),
                weight_kg: weight,
                full_name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::tests::sample_form;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a   b \t c  "), "a b c");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_base_description() {
        let form = sample_form();
        assert_eq!(
            base_description(&form),
            "Colchão de Molas Ensacadas Pillow Top Supreme da Gazin"
        );
    }

    #[test]
    fn test_base_description_without_pillows() {
        let mut form = sample_form();
        form.pillow_options.clear();
        assert_eq!(
            base_description(&form),
            "Colchão de Molas Ensacadas Supreme da Gazin"
        );
    }

    #[test]
    fn test_compose_mattress_names() {
        let form = sample_form();
        let names = compose_mattress_names(&form);
        assert_eq!(names.len(), 2);

        let solteiro = &names[0];
        assert_eq!(solteiro.size, Size::Solteiro);
        assert_eq!(solteiro.weight_kg, 18.5);
        assert_eq!(
            solteiro.full_name,
            "Colchão de Molas Ensacadas Pillow Top Supreme da Gazin Solteiro 88x188x30cm - Branco"
        );

        let casal = &names[1];
        assert_eq!(casal.dimensions, "138x188");
        assert_eq!(casal.weight_kg, 27.0);
    }

    #[test]
    fn test_composition_is_idempotent() {
        let form = sample_form();
        assert_eq!(compose_mattress_names(&form), compose_mattress_names(&form));
    }

    #[test]
    fn test_missing_weight_defaults_to_zero() {
        let mut form = sample_form();
        form.weights.clear();
        let names = compose_mattress_names(&form);
        assert!(names.iter().all(|n| n.weight_kg == 0.0));
    }

    #[test]
    fn test_unknown_color_falls_back_to_code() {
        let mut form = sample_form();
        form.mattress_color = ColorCode::new("77");
        let names = compose_mattress_names(&form);
        assert_eq!(names[0].color_label, "77");
        assert!(names[0].full_name.ends_with("- 77"));
    }
}
