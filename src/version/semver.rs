use std::cmp::Ordering;

use semver::Version;

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Strips a leading 'v' and pads partial versions like "1" or "1.2" with zeros.
///
/// Examples:
/// - "v1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "v1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Order two version strings semantically, or None if either fails to parse
pub fn compare_semantic(a: &str, b: &str) -> Option<Ordering> {
    Some(parse_version(a)?.cmp(&parse_version(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(Version::new(1, 0, 0)))]
    #[case("v1.2", Some(Version::new(1, 2, 0)))]
    #[case("v1.2.3", Some(Version::new(1, 2, 3)))]
    #[case("119.0.20230814050322", Some(Version::new(119, 0, 20230814050322)))]
    #[case("nightly", None)]
    #[case("", None)]
    fn parse_version_normalizes_input(#[case] input: &str, #[case] expected: Option<Version>) {
        assert_eq!(parse_version(input), expected);
    }

    #[rstest]
    #[case("v9.0.0", "v10.0.0", Some(Ordering::Less))]
    #[case("v1.2.3", "1.2.3", Some(Ordering::Equal))]
    #[case("v2", "v1.9.9", Some(Ordering::Greater))]
    #[case("v1.0.0", "nightly", None)]
    fn compare_semantic_orders_numerically(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Option<Ordering>,
    ) {
        assert_eq!(compare_semantic(a, b), expected);
    }
}
