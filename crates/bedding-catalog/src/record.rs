//! Catalog record assembly.
//!
//! Flattens composed names into the ERP record shape, assigning each one
//! a sequential code and its checksum barcode. Records preserve field
//! order so exports render columns the way the ERP expects them.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::barcode::ean13;
use crate::form::ProductForm;
use crate::naming::{KitName, MattressName};
use crate::reference::{format_brand_code, format_color_code};
use crate::sequence::SequenceAllocator;

/// Placeholder product code the ERP fills in on import.
pub const DEFAULT_PRODUCT_CODE: &str = "XXX";
/// NCM fiscal classification for standalone mattresses.
pub const MATTRESS_NCM: &str = "94042900";
/// NCM fiscal classification for kits.
pub const KIT_NCM: &str = "94042100";

const DEFAULT_SKU_FLAG: &str = "1";
const DEFAULT_PARENT_CODE: &str = "";

/// Constant ERP fields shared by every record.
const DEFAULT_FIELDS: [(&str, &str); 10] = [
    ("B1_ORIGEM", "=\"0\""),
    ("B1_RASTRO", "N"),
    ("B1_UM", "UN"),
    ("B1_LOCPAD", "1"),
    ("B1_XTPVOL1", "UN"),
    ("B1_XQTVOL1", "1"),
    ("B1_LOCALIZ", "N"),
    ("B1_GRTRIB", "R94042"),
    ("B1_XCALAUT", "=\"2\""),
    ("B1_CONTA", "11501001"),
];

/// Canonical column order for ERP-facing exports.
pub const EXPORT_COLUMNS: [&str; 23] = [
    "B1_XCODANT",
    "B1_COD",
    "B1_DESC",
    "B1_TIPO",
    "B1_GRUPO",
    "B1_XMARCA",
    "B1_XSUBGRU",
    "B1_POSIPI",
    "B1_XPRDSKU",
    "B1_XPRDPAI",
    "B1_CODBAR",
    "B1_PESBRU",
    "B1_PESO",
    "B1_ORIGEM",
    "B1_RASTRO",
    "B1_UM",
    "B1_LOCPAD",
    "B1_XTPVOL1",
    "B1_XQTVOL1",
    "B1_LOCALIZ",
    "B1_GRTRIB",
    "B1_XCALAUT",
    "B1_CONTA",
];

/// A scalar record field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

impl FieldValue {
    /// Try to get the value as an i64.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            FieldValue::Real(f) => Some(*f as i64),
            _ => None,
        }
    }

    /// Try to get the value as an f64.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            FieldValue::Real(f) => Some(*f),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get the value as a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    /// Render the value the way delimited exports carry it; null renders
    /// empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Real(r) => write!(f, "{r}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::Integer(v as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Integer(v as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Real(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => FieldValue::Null,
        }
    }
}

/// A flattened catalog record: field name to scalar value, preserving
/// insertion order.
///
/// Backed by parallel column/value vectors so JSON round-trips and
/// column-union exports see fields in the order they were assembled.
/// Records are created by [`assemble_records`] and never mutated after.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogRecord {
    columns: Vec<String>,
    values: Vec<FieldValue>,
}

impl CatalogRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, overwriting in place when the column already exists.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<FieldValue>) {
        let column = column.into();
        let value = value.into();
        match self.columns.iter().position(|c| *c == column) {
            Some(index) => self.values[index] = value,
            None => {
                self.columns.push(column);
                self.values.push(value);
            }
        }
    }

    /// Get a value by column name.
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }

    /// The column names, in insertion order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for CatalogRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CatalogRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = CatalogRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a catalog record object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut record = CatalogRecord::new();
                while let Some((column, value)) = access.next_entry::<String, FieldValue>()? {
                    record.set(column, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Assemble one record per composed name: mattresses first, then kits,
/// each taking the next sequential code and the barcode over it.
///
/// After assembly the allocator's current value is the seed for the next
/// run; surfacing it is the caller's concern.
pub fn assemble_records(
    form: &ProductForm,
    mattresses: &[MattressName],
    kits: &[KitName],
    allocator: &mut SequenceAllocator,
) -> Vec<CatalogRecord> {
    let brand_code = format_brand_code(form.brand_code.as_str());
    let mut records = Vec::with_capacity(mattresses.len() + kits.len());

    for mattress in mattresses {
        let code = allocator.advance();
        let mut record = CatalogRecord::new();
        record.set("tipo", "colchao");
        record.set("B1_DESC", mattress.full_name.clone());
        record.set("B1_COD", DEFAULT_PRODUCT_CODE);
        record.set("B1_XCODANT", code);
        record.set("B1_TIPO", "RC");
        record.set("B1_POSIPI", MATTRESS_NCM);
        record.set("B1_XPRDSKU", DEFAULT_SKU_FLAG);
        record.set("B1_XPRDPAI", DEFAULT_PARENT_CODE);
        record.set("B1_XSUBGRU", format_color_code(mattress.color_code.as_str()));
        record.set("B1_PESO", mattress.weight_kg);
        record.set("B1_PESBRU", mattress.weight_kg);
        record.set("B1_CODBAR", barcode_cell(code));
        record.set("cor", mattress.color_label.clone());
        record.set("medida", mattress.size_label.clone());
        record.set("dimensoes", mattress.dimensions.clone());
        record.set("alturaColchao", mattress.height_cm);
        record.set("origem", "formulario");
        push_shared_fields(&mut record, &brand_code);
        records.push(record);
    }

    for kit in kits {
        let code = allocator.advance();
        let mut record = CatalogRecord::new();
        record.set("tipo", "kit");
        record.set("B1_DESC", kit.full_name.clone());
        record.set("B1_COD", DEFAULT_PRODUCT_CODE);
        record.set("B1_XCODANT", code);
        record.set("B1_TIPO", "KT");
        record.set("B1_POSIPI", KIT_NCM);
        record.set("B1_XPRDSKU", DEFAULT_SKU_FLAG);
        record.set("B1_XPRDPAI", DEFAULT_PARENT_CODE);
        record.set("B1_XSUBGRU", format_color_code(kit.color_code.as_str()));
        record.set("B1_PESO", kit.total_weight_kg);
        record.set("B1_PESBRU", kit.total_weight_kg);
        record.set("B1_CODBAR", barcode_cell(code));
        record.set("variacaoId", kit.variation_id.as_str());
        record.set("auxiliar", kit.auxiliary_label.clone());
        record.set("descricaoBase", kit.variation_label.clone());
        record.set("cor", kit.color_label.clone());
        record.set("medida", kit.size_label.clone());
        record.set("dimensoes", kit.dimensions.clone());
        record.set("alturaBase", kit.base_height_cm);
        record.set("alturaTotal", kit.total_height_cm);
        push_shared_fields(&mut record, &brand_code);
        records.push(record);
    }

    records
}

/// Spreadsheet-guard wrapping keeps the barcode from being read as a
/// number and losing leading digits.
fn barcode_cell(code: u64) -> String {
    format!("=\"{}\"", ean13(code))
}

fn push_shared_fields(record: &mut CatalogRecord, brand_code: &str) {
    record.set("B1_GRUPO", brand_code);
    record.set("B1_XMARCA", brand_code);
    for (column, value) in DEFAULT_FIELDS {
        record.set(column, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::is_valid;
    use crate::form::tests::sample_form;
    use crate::naming::{compose_kit_names, compose_mattress_names};

    fn assemble_sample() -> (Vec<CatalogRecord>, SequenceAllocator) {
        let mut form = sample_form();
        form.starting_sequence = 120;
        let mattresses = compose_mattress_names(&form);
        let expansion = compose_kit_names(&form, &mattresses);
        let mut allocator = SequenceAllocator::new(form.starting_sequence);
        let records = assemble_records(&form, &mattresses, &expansion.kits, &mut allocator);
        (records, allocator)
    }

    #[test]
    fn test_sequential_codes_and_barcodes() {
        let (records, allocator) = assemble_sample();
        // 2 mattresses + 2 sizes x 2 base colors.
        assert_eq!(records.len(), 6);

        let codes: Vec<i64> = records
            .iter()
            .map(|r| r.get("B1_XCODANT").unwrap().as_integer().unwrap())
            .collect();
        assert_eq!(codes, [121, 122, 123, 124, 125, 126]);
        assert_eq!(allocator.current(), 126);

        for record in &records {
            let cell = record.get("B1_CODBAR").unwrap().as_text().unwrap();
            let code = cell.trim_start_matches("=\"").trim_end_matches('"');
            assert!(is_valid(code));
        }
    }

    #[test]
    fn test_record_kinds_and_fields() {
        let (records, _) = assemble_sample();

        let mattress = &records[0];
        assert_eq!(mattress.get("tipo").unwrap().as_text(), Some("colchao"));
        assert_eq!(mattress.get("B1_TIPO").unwrap().as_text(), Some("RC"));
        assert_eq!(mattress.get("B1_POSIPI").unwrap().as_text(), Some(MATTRESS_NCM));
        assert_eq!(mattress.get("origem").unwrap().as_text(), Some("formulario"));
        assert_eq!(mattress.get("B1_PESO").unwrap().as_real(), Some(18.5));
        assert_eq!(mattress.get("B1_XSUBGRU").unwrap().as_text(), Some("1"));

        let kit = &records[2];
        assert_eq!(kit.get("tipo").unwrap().as_text(), Some("kit"));
        assert_eq!(kit.get("B1_TIPO").unwrap().as_text(), Some("KT"));
        assert_eq!(kit.get("B1_POSIPI").unwrap().as_text(), Some(KIT_NCM));
        assert_eq!(kit.get("variacaoId").unwrap().as_text(), Some("cama-box"));
        assert!(kit.get("auxiliar").unwrap().is_null());
        assert_eq!(kit.get("alturaBase").unwrap().as_integer(), Some(39));

        for record in &records {
            assert_eq!(record.get("B1_COD").unwrap().as_text(), Some("XXX"));
            assert_eq!(record.get("B1_GRUPO").unwrap().as_text(), Some("0041"));
            assert_eq!(record.get("B1_XMARCA").unwrap().as_text(), Some("0041"));
            assert_eq!(record.get("B1_CONTA").unwrap().as_text(), Some("11501001"));
        }
    }

    #[test]
    fn test_record_json_roundtrip_preserves_order() {
        let (records, _) = assemble_sample();
        let json = serde_json::to_string(&records[0]).unwrap();
        assert!(json.starts_with(r#"{"tipo":"colchao","B1_DESC":"#));

        let back: CatalogRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, records[0]);
        assert_eq!(back.columns(), records[0].columns());
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut record = CatalogRecord::new();
        record.set("a", 1i64);
        record.set("b", 2i64);
        record.set("a", 3i64);
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("a").unwrap().as_integer(), Some(3));
        assert_eq!(record.columns(), ["a", "b"]);
    }
}
