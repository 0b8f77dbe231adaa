//! Base weight tables in kilograms.
//!
//! Standard bases weigh differently per mattress size; auxiliary
//! variations carry one flat weight per catalog id. Lookups return
//! `Option` so the expansion engine can surface misses instead of
//! folding them into a silent zero.

use super::size::Size;
use super::variation::{VariationCategory, VariationSpec, CAMA_BOX_BAU_ID, CAMA_BOX_ID};

const CAMA_BOX_WEIGHTS: [(Size, f64); 6] = [
    (Size::Solteirinho, 18.6),
    (Size::Solteiro, 22.1),
    (Size::SolteiroKing, 24.1),
    (Size::Casal, 30.0),
    (Size::Queen, 39.0),
    (Size::King, 48.2),
];

const CAMA_BOX_BAU_WEIGHTS: [(Size, f64); 6] = [
    (Size::Solteirinho, 40.2),
    (Size::Solteiro, 42.9),
    (Size::SolteiroKing, 44.5),
    (Size::Casal, 58.5),
    (Size::Queen, 73.0),
    (Size::King, 80.4),
];

const AUXILIARY_WEIGHTS: [(&str, f64); 4] = [
    ("cama-box-aux-espuma", 30.0),
    ("cama-box-aux-molas", 35.0),
    ("cama-box-bau-aux-espuma", 43.9),
    ("cama-box-bau-aux-molas", 57.9),
];

fn size_weight(table: &[(Size, f64)], size: Size) -> Option<f64> {
    table.iter().find(|(s, _)| *s == size).map(|(_, w)| *w)
}

/// Look up the flat weight of an auxiliary variation.
pub fn auxiliary_weight(variation_id: &str) -> Option<f64> {
    AUXILIARY_WEIGHTS
        .iter()
        .find(|(id, _)| *id == variation_id)
        .map(|(_, w)| *w)
}

/// Look up the base weight a variation contributes for a mattress size.
///
/// Only the two standard base ids have per-size tables; a Base-category
/// id outside them, or any table miss, returns `None`.
pub fn base_weight(spec: &VariationSpec, size: Size) -> Option<f64> {
    match spec.category {
        VariationCategory::Base => match spec.id {
            CAMA_BOX_ID => size_weight(&CAMA_BOX_WEIGHTS, size),
            CAMA_BOX_BAU_ID => size_weight(&CAMA_BOX_BAU_WEIGHTS, size),
            _ => None,
        },
        VariationCategory::Auxiliary => auxiliary_weight(spec.id),
    }
}
