use crate::error::InvalidInput;

// ---------------------------------------------------------------------------
// Raw text → numeric feature vector
// ---------------------------------------------------------------------------

/// Parse every raw form value as `f64`.
///
/// The result is all-or-nothing: one unparseable value invalidates the whole
/// vector. Surrounding whitespace is ignored, but an empty (or blank) value is
/// a failure rather than zero. No range checks are applied.
pub fn coerce<S: AsRef<str>>(raw: &[S]) -> Result<Vec<f64>, InvalidInput> {
    raw.iter()
        .enumerate()
        .map(|(index, value)| parse_value(value.as_ref()).ok_or(InvalidInput { index }))
        .collect()
}

fn parse_value(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_numeric() {
        let raw = ["2", "120", "70", "30", "80", "25.0", "0.5", "33"];
        let values = coerce(&raw).unwrap();
        assert_eq!(values, vec![2.0, 120.0, 70.0, 30.0, 80.0, 25.0, 0.5, 33.0]);
    }

    #[test]
    fn test_empty_string_is_invalid() {
        let raw = ["1", "", "3"];
        assert_eq!(coerce(&raw), Err(InvalidInput { index: 1 }));
    }

    #[test]
    fn test_blank_string_is_invalid() {
        assert_eq!(coerce(&["   "]), Err(InvalidInput { index: 0 }));
    }

    #[test]
    fn test_first_failure_reported() {
        let raw = ["abc", "1", "x"];
        assert_eq!(coerce(&raw), Err(InvalidInput { index: 0 }));
    }

    #[test]
    fn test_whitespace_and_exponents() {
        let raw = vec![" 1.5 ".to_string(), "-2e3".to_string(), "+.25".to_string()];
        assert_eq!(coerce(&raw).unwrap(), vec![1.5, -2000.0, 0.25]);
    }

    #[test]
    fn test_no_domain_validation() {
        // A negative age is syntactically fine.
        assert_eq!(coerce(&["-40"]).unwrap(), vec![-40.0]);
    }

    #[test]
    fn test_empty_sequence() {
        let raw: [&str; 0] = [];
        assert_eq!(coerce(&raw).unwrap(), Vec::<f64>::new());
    }
}
