//! Version string helpers for matching declared versions to release cycles.

/// Strips a leading `v` and keeps the leading run of dot-separated integer
/// components.
///
/// A component with trailing garbage contributes its leading digits and ends
/// the run: `"v2.7.16rc1"` becomes `"2.7.16"`, `"1.2.x"` becomes `"1.2"`.
/// Inputs with no leading digits normalize to an empty string.
pub fn normalize_version(version: &str) -> String {
    let trimmed = version.trim();
    let trimmed = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let mut components: Vec<&str> = Vec::new();
    for part in trimmed.split('.') {
        let digits_end = part
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(part.len());
        if digits_end == 0 {
            break;
        }
        components.push(&part[..digits_end]);
        if digits_end < part.len() {
            break;
        }
    }

    components.join(".")
}

/// The leading integer component of a version, after normalization
pub fn major_component(version: &str) -> Option<u64> {
    normalize_version(version)
        .split('.')
        .next()
        .and_then(|major| major.parse().ok())
}

/// Whether moving from `current` to `recommended` crosses a major version
///
/// Returns `false` when either side has no leading integer component.
pub fn has_major_version_change(current: &str, recommended: &str) -> bool {
    match (major_component(current), major_component(recommended)) {
        (Some(current), Some(recommended)) => current != recommended,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_prefix_and_suffix() {
        assert_eq!(normalize_version("v2.7.16rc1"), "2.7.16");
        assert_eq!(normalize_version("V1.0"), "1.0");
        assert_eq!(normalize_version("3.2.1"), "3.2.1");
    }

    #[test]
    fn test_normalize_stops_at_non_numeric_component() {
        assert_eq!(normalize_version("1.2.x"), "1.2");
        assert_eq!(normalize_version("5.0.0-SNAPSHOT"), "5.0.0");
        assert_eq!(normalize_version("2.7.18.RELEASE"), "2.7.18");
    }

    #[test]
    fn test_normalize_without_leading_digits() {
        assert_eq!(normalize_version("latest"), "");
        assert_eq!(normalize_version("^1.2.3"), "");
        assert_eq!(normalize_version(""), "");
    }

    #[test]
    fn test_major_component() {
        assert_eq!(major_component("v18.19.0"), Some(18));
        assert_eq!(major_component("latest"), None);
    }

    #[test]
    fn test_has_major_version_change() {
        assert!(has_major_version_change("3.2.1", "4.0.1"));
        assert!(!has_major_version_change("3.2.1", "3.3.0"));
        assert!(!has_major_version_change("latest", "4.0.1"));
        assert!(!has_major_version_change("3.2.1", ""));
    }
}
