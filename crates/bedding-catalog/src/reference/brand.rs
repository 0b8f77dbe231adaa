//! Brand catalog.

/// A brand option in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandOption {
    /// Four-digit brand code (e.g., "0001").
    pub code: &'static str,
    /// Display label (e.g., "Ortobom").
    pub label: &'static str,
}

/// All brands in catalog order.
pub const BRANDS: [BrandOption; 17] = [
    BrandOption { code: "0001", label: "Ortobom" },
    BrandOption { code: "0002", label: "Probel" },
    BrandOption { code: "0003", label: "Castor" },
    BrandOption { code: "0004", label: "Anjos" },
    BrandOption { code: "0007", label: "Confort Prime" },
    BrandOption { code: "0041", label: "Gazin" },
    BrandOption { code: "0042", label: "Lucas Home" },
    BrandOption { code: "0045", label: "Umaflex" },
    BrandOption { code: "0049", label: "Hellen" },
    BrandOption { code: "0060", label: "Damassu" },
    BrandOption { code: "0061", label: "Tsm" },
    BrandOption { code: "0062", label: "Polar" },
    BrandOption { code: "0063", label: "Cristalflex" },
    BrandOption { code: "0065", label: "SMP" },
    BrandOption { code: "0066", label: "Demonstração Amostra" },
    BrandOption { code: "0067", label: "Bed'S" },
    BrandOption { code: "0068", label: "Topazio" },
];

/// Look up the display label for a brand code.
///
/// Callers fall back to the raw code when the lookup misses.
pub fn brand_label(code: &str) -> Option<&'static str> {
    BRANDS.iter().find(|b| b.code == code).map(|b| b.label)
}

/// Zero-pad a brand code to the four digits ERP records carry.
pub fn format_brand_code(code: &str) -> String {
    format!("{:0>4}", code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_label() {
        assert_eq!(brand_label("0001"), Some("Ortobom"));
        assert_eq!(brand_label("0068"), Some("Topazio"));
        assert_eq!(brand_label("9999"), None);
    }

    #[test]
    fn test_format_brand_code() {
        assert_eq!(format_brand_code("41"), "0041");
        assert_eq!(format_brand_code("0001"), "0001");
        assert_eq!(format_brand_code("123456"), "123456");
        assert_eq!(format_brand_code(""), "0000");
    }
}
