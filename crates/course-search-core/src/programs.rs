//! Academic program name → course prefix lookup.

/// Lowercase program names and the course prefixes that belong to them.
pub const PROGRAM_PREFIXES: &[(&str, &[&str])] = &[
    ("computer science", &["ICS"]),
    ("information & computer sciences", &["ICS"]),
    ("electrical engineering", &["EE", "ECE"]),
    ("business administration", &["BUS", "FIN", "MKT"]),
];

/// Course prefixes for a lowercase program name, if the program is known.
pub fn course_prefixes_for_program(program: &str) -> Option<&'static [&'static str]> {
    PROGRAM_PREFIXES
        .iter()
        .find(|&&(name, _)| name == program)
        .map(|&(_, prefixes)| prefixes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_programs() {
        assert_eq!(course_prefixes_for_program("computer science"), Some(&["ICS"][..]));
        assert_eq!(
            course_prefixes_for_program("business administration"),
            Some(&["BUS", "FIN", "MKT"][..])
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(course_prefixes_for_program("Computer Science"), None);
        assert_eq!(course_prefixes_for_program("computer"), None);
        assert_eq!(course_prefixes_for_program("nursing"), None);
    }

    #[test]
    fn test_keys_are_lowercase() {
        for (name, prefixes) in PROGRAM_PREFIXES {
            assert_eq!(*name, name.to_lowercase());
            assert!(!prefixes.is_empty());
        }
    }
}
