//! Checksum barcode generation.
//!
//! Codes are EAN-13 shaped: a constant company prefix, a zero-padded
//! sequential body filling a 12-digit base, and a weighted-sum check
//! digit. Generation is deterministic and never fails; non-numeric text
//! input is filtered to its digits before padding.

/// Constant company prefix of every generated code.
pub const PREFIX: &str = "7777";

/// Length of the code base, check digit excluded.
const BASE_LENGTH: usize = 12;

/// Generate the 13-digit barcode for a sequence number.
pub fn ean13(sequence: u64) -> String {
    ean13_from_text(&sequence.to_string())
}

/// Generate the 13-digit barcode for free-form text.
///
/// Non-digit characters are stripped; digits beyond the padded body are
/// kept whole rather than truncated.
pub fn ean13_from_text(sequence: &str) -> String {
    let base = normalize_sequence(sequence);
    let check = check_digit(&base);
    format!("{base}{check}")
}

/// Re-validate a generated code against the check-digit rule.
pub fn is_valid(code: &str) -> bool {
    if code.len() != BASE_LENGTH + 1 || !code.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let (base, check) = code.split_at(BASE_LENGTH);
    check_digit(base).to_string() == check
}

fn normalize_sequence(sequence: &str) -> String {
    let digits: String = sequence.chars().filter(|c| c.is_ascii_digit()).collect();
    let body = BASE_LENGTH - PREFIX.len();
    let padding = body.saturating_sub(digits.len());
    format!("{}{}{}", PREFIX, "0".repeat(padding), digits)
}

/// Weighted-sum check digit: scanning 1-based positions left to right,
/// even positions weigh x3 and odd positions x1.
fn check_digit(base: &str) -> u32 {
    let sum: u32 = base
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let digit = c.to_digit(10).unwrap_or(0);
            if (i + 1) % 2 == 0 {
                digit * 3
            } else {
                digit
            }
        })
        .sum();
    (10 - sum % 10) % 10
}
