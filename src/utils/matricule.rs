//! Student matricule generation.
//!
//! A matricule reads `YY/ucc/RRRR/YY+1`: the two-digit enrollment year,
//! the university code, a four-digit random serial, and the two-digit
//! year after enrollment. Example for 2024: `24/ucc/4821/25`.

use rand::Rng;
use regex::Regex;

const MAX_ATTEMPTS: u32 = 64;

/// Builds the matricule for a given serial.
pub fn format_matricule(university_code: &str, enrollment_year: i32, serial: u32) -> String {
    let start = enrollment_year.rem_euclid(100);
    let end = (enrollment_year + 1).rem_euclid(100);
    format!("{start:02}/{university_code}/{serial:04}/{end:02}")
}

/// Checks that a string is a well-formed matricule for the given
/// university code.
pub fn is_valid_matricule(university_code: &str, matricule: &str) -> bool {
    let pattern = format!(r"^\d{{2}}/{}/\d{{4}}/\d{{2}}$", regex::escape(university_code));
    // The pattern is built from escaped input, compilation cannot fail
    Regex::new(&pattern)
        .map(|re| re.is_match(matricule))
        .unwrap_or(false)
}

/// Draws random serials until `exists` reports a free matricule.
/// Returns `None` when the space for this year is saturated enough that
/// `MAX_ATTEMPTS` draws all collided.
pub fn generate_unique_matricule<F>(
    university_code: &str,
    enrollment_year: i32,
    mut exists: F,
) -> Option<String>
where
    F: FnMut(&str) -> bool,
{
    let mut rng = rand::rng();
    for _ in 0..MAX_ATTEMPTS {
        let serial: u32 = rng.random_range(1000..=9999);
        let candidate = format_matricule(university_code, enrollment_year, serial);
        if !exists(&candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_format_matches_pattern() {
        let m = format_matricule("ucc", 2024, 4821);
        assert_eq!(m, "24/ucc/4821/25");
        assert!(is_valid_matricule("ucc", &m));
    }

    #[test]
    fn test_century_wrap() {
        let m = format_matricule("ucc", 2099, 1234);
        assert_eq!(m, "99/ucc/1234/00");
        assert!(is_valid_matricule("ucc", &m));
    }

    #[test]
    fn test_invalid_matricules_rejected() {
        assert!(!is_valid_matricule("ucc", "24/ucc/482/25"));
        assert!(!is_valid_matricule("ucc", "24/abc/4821/25"));
        assert!(!is_valid_matricule("ucc", "24/ucc/4821/25/"));
        assert!(!is_valid_matricule("ucc", "matricule"));
    }

    #[test]
    fn test_generated_matricules_are_unique_and_valid() {
        let mut seen: HashSet<String> = HashSet::new();
        for _ in 0..1000 {
            let m = generate_unique_matricule("ucc", 2024, |candidate| seen.contains(candidate))
                .expect("serial space not exhausted");
            assert!(is_valid_matricule("ucc", &m));
            assert!(seen.insert(m));
        }
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_exhausted_space_returns_none() {
        assert_eq!(generate_unique_matricule("ucc", 2024, |_| true), None);
    }
}
