//! Form field coercion
//!
//! Every form field arrives optional and is coerced, never rejected: an
//! unchecked checkbox is simply absent, and anything other than the
//! checked marker "y" silently reads as false.

/// Checkbox coercion: checked iff the submitted value is exactly "y".
pub fn checkbox(value: Option<&str>) -> bool {
    matches!(value, Some("y"))
}

/// Split a comma-separated genres field into the ordered genre list.
///
/// Absent or empty field means no genres. Entries are trimmed; empty
/// entries (stray commas) are dropped.
pub fn split_genres(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_checked() {
        assert!(checkbox(Some("y")));
    }

    #[test]
    fn checkbox_absent_or_other_is_false() {
        assert!(!checkbox(None));
        assert!(!checkbox(Some("")));
        assert!(!checkbox(Some("yes")));
        assert!(!checkbox(Some("true")));
        assert!(!checkbox(Some("Y")));
    }

    #[test]
    fn genres_split_and_trimmed() {
        assert_eq!(
            split_genres(Some("Jazz, Reggae ,Swing")),
            vec!["Jazz", "Reggae", "Swing"]
        );
    }

    #[test]
    fn genres_preserve_order() {
        assert_eq!(split_genres(Some("Rock n Roll,Blues")), vec!["Rock n Roll", "Blues"]);
    }

    #[test]
    fn genres_empty_cases() {
        assert!(split_genres(None).is_empty());
        assert!(split_genres(Some("")).is_empty());
        assert!(split_genres(Some(" , ,")).is_empty());
    }
}
