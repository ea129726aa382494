//! Ingredient naming rules.
//!
//! Kitchen equipment is touched by steps but never recorded as an
//! ingredient, and several spices go by more than one name. Both tables are
//! static.

/// Items that are equipment, not ingredients.
pub const EQUIPMENT: &[&str] = &["pan", "stove", "board"];

/// Groups of interchangeable ingredient names.
pub const SYNONYMS: &[&[&str]] = &[
    &["zeera", "cumin", "jeera"],
    &["turmeric", "haldi"],
    &["redChilli", "red chili powder", "chilli powder"],
];

/// Whether `item` is kitchen equipment.
pub fn is_equipment(item: &str) -> bool {
    EQUIPMENT.contains(&item)
}

/// The synonym group containing `name`, if any.
pub fn synonyms_of(name: &str) -> Option<&'static [&'static str]> {
    SYNONYMS.iter().copied().find(|group| group.contains(&name))
}

/// Whether `actual` satisfies `expected`.
///
/// A missing expectation accepts anything. Otherwise the names must be equal
/// or belong to the same synonym group. Names are compared exactly.
///
/// ```rust
/// use tadka_core::ingredients::validate_ingredient;
///
/// assert!(validate_ingredient("haldi", Some("turmeric")));
/// assert!(validate_ingredient("anything", None));
/// assert!(!validate_ingredient("cumin", Some("turmeric")));
/// ```
pub fn validate_ingredient(actual: &str, expected: Option<&str>) -> bool {
    let Some(expected) = expected else {
        return true;
    };
    if actual == expected {
        return true;
    }
    synonyms_of(actual).is_some_and(|group| group.contains(&expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_names() {
        for item in ["pan", "stove", "board"] {
            assert!(is_equipment(item), "{item} should be equipment");
        }
        assert!(!is_equipment("potato"));
        assert!(!is_equipment("Pan"));
    }

    #[test]
    fn test_synonym_groups() {
        assert!(validate_ingredient("zeera", Some("cumin")));
        assert!(validate_ingredient("jeera", Some("zeera")));
        assert!(validate_ingredient("haldi", Some("turmeric")));
        assert!(validate_ingredient("chilli powder", Some("redChilli")));
        assert!(validate_ingredient("red chili powder", Some("chilli powder")));
    }

    #[test]
    fn test_unrelated_names_do_not_match() {
        assert!(!validate_ingredient("haldi", Some("cumin")));
        assert!(!validate_ingredient("salt", Some("turmeric")));
        assert!(!validate_ingredient("Haldi", Some("turmeric")));
        assert!(!validate_ingredient("potato", Some("onion")));
    }

    #[test]
    fn test_missing_expectation_is_wildcard() {
        assert!(validate_ingredient("anything", None));
        assert!(validate_ingredient("", None));
    }

    #[test]
    fn test_exact_match_outside_table() {
        assert!(validate_ingredient("potato", Some("potato")));
    }

    #[test]
    fn test_validation_is_symmetric() {
        let names: Vec<&str> = SYNONYMS
            .iter()
            .flat_map(|group| group.iter().copied())
            .chain(["salt", "potato"])
            .collect();
        for &a in &names {
            for &b in &names {
                assert_eq!(
                    validate_ingredient(a, Some(b)),
                    validate_ingredient(b, Some(a)),
                    "asymmetric for {a} / {b}"
                );
            }
        }
    }

    #[test]
    fn test_no_name_in_two_groups() {
        let mut seen = std::collections::HashSet::new();
        for name in SYNONYMS.iter().flat_map(|group| group.iter()) {
            assert!(seen.insert(*name), "{name} appears in more than one group");
        }
    }
}
