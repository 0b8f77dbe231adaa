//! Color catalog.

/// A color option in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    /// Two-digit color code (e.g., "01").
    pub code: &'static str,
    /// Display label (e.g., "Branco").
    pub label: &'static str,
}

/// All colors in catalog order.
pub const COLORS: [ColorOption; 6] = [
    ColorOption { code: "00", label: "Preto" },
    ColorOption { code: "01", label: "Branco" },
    ColorOption { code: "02", label: "Marrom" },
    ColorOption { code: "03", label: "Cinza" },
    ColorOption { code: "04", label: "Multicolor" },
    ColorOption { code: "18", label: "Bege" },
];

/// Look up the display label for a color code.
///
/// Callers fall back to the raw code when the lookup misses; an unknown
/// code is never an error.
pub fn color_label(code: &str) -> Option<&'static str> {
    COLORS.iter().find(|c| c.code == code).map(|c| c.label)
}

/// Render a color code as the plain number ERP records carry
/// ("01" -> "1", "18" -> "18"). Non-numeric codes render as "0".
pub fn format_color_code(code: &str) -> String {
    match code.trim().parse::<i64>() {
        Ok(n) => n.to_string(),
        Err(_) => "0".to_string(),
    }
}
