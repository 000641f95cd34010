/// Folds a string to the single case used for every relevance comparison.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}

/// Relative relevance of `score` against the best score in the same result set,
/// rounded down to a whole percent.
pub fn percent(score: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    ((u64::from(score) * 100) / u64::from(max)) as u32
}

/// Builds the label shown for a suggestion, with an optional relevance annotation.
pub fn format_label(name: &str, percent: Option<u32>) -> String {
    match percent {
        Some(p) => format!("{name} ({p}%)"),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_unicode_case() {
        assert_eq!(normalize("Custard Apple"), "custard apple");
        assert_eq!(normalize("ÄPFEL"), "äpfel");
        assert_eq!(normalize("Avocado 🥑"), "avocado 🥑");
    }

    #[test]
    fn percent_rounds_down() {
        assert_eq!(percent(10, 10), 100);
        assert_eq!(percent(2, 3), 66);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(0, 7), 0);
    }

    #[test]
    fn percent_of_zero_max_is_zero() {
        assert_eq!(percent(5, 0), 0);
    }

    #[test]
    fn label_annotation() {
        assert_eq!(format_label("Mango", None), "Mango");
        assert_eq!(format_label("Mango", Some(100)), "Mango (100%)");
        assert_eq!(format_label("Mangosteen", Some(57)), "Mangosteen (57%)");
    }
}
