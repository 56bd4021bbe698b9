use uuid::Uuid;

/// Replace every character outside `[A-Za-z0-9_-]` with an underscore,
/// yielding an identifier safe for downstream radiance inputs.
pub fn clean_string(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Source of fallback names for objects without a stored name.
///
/// Injected into the import so tests can supply deterministic names instead
/// of depending on process-wide uuid state.
pub trait NameGenerator {
    fn next_name(&mut self) -> String;
}

/// Production generator: `Grid_` plus the first eight hex digits of a v4 uuid.
#[derive(Debug, Default)]
pub struct UuidNames;

impl NameGenerator for UuidNames {
    fn next_name(&mut self) -> String {
        let id = Uuid::new_v4().simple().to_string();
        format!("Grid_{}", &id[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_string_is_identity_on_safe_input() {
        assert_eq!(clean_string("Room_1-south"), "Room_1-south");
    }

    #[test]
    fn clean_string_replaces_unsafe_chars() {
        assert_eq!(clean_string("ground floor (east)"), "ground_floor__east_");
        assert_eq!(clean_string("a/b\\c"), "a_b_c");
    }

    #[test]
    fn uuid_names_have_fixed_shape() {
        let mut names = UuidNames;
        let a = names.next_name();
        let b = names.next_name();
        assert!(a.starts_with("Grid_"));
        assert_eq!(a.len(), 13);
        assert_ne!(a, b);
    }
}
