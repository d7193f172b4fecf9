//! Cell normalization shared by the tabular readers.

/// Normalize a raw code cell.
///
/// Trims whitespace and drops an all-zero fractional part, so a spreadsheet
/// export of `101.0` reads as `101`. Anything else is kept verbatim; the
/// rule engine decides whether it is a valid code.
pub fn normalize_code(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some((whole, fraction)) = trimmed.split_once('.') {
        let integral = !whole.is_empty()
            && whole.bytes().all(|b| b.is_ascii_digit())
            && !fraction.is_empty()
            && fraction.bytes().all(|b| b == b'0');
        if integral {
            return whole.to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_floats_lose_their_fraction() {
        assert_eq!(normalize_code("101.0"), "101");
        assert_eq!(normalize_code(" 0101.00 "), "0101");
    }

    #[test]
    fn other_values_are_only_trimmed() {
        assert_eq!(normalize_code(" 010110 "), "010110");
        assert_eq!(normalize_code("101.5"), "101.5");
        assert_eq!(normalize_code(".0"), ".0");
        assert_eq!(normalize_code("12AB"), "12AB");
    }
}
