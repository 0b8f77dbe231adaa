//! Name composition.
//!
//! The composer derives per-size mattress names; the kit engine expands
//! variations across colors and eligible sizes.

mod composer;
mod kits;

pub use composer::{base_description, compose_mattress_names, normalize_whitespace, MattressName};
pub use kits::{compose_kit_names, ExpansionWarning, KitExpansion, KitName};
