use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use semver::Version;

use crate::error::{BatchTagError, Result};

/// One parsed line of the versions file: a release of `product` at `version`,
/// cut from commit `commit`.
///
/// Entries are ephemeral; they are parsed, acted on, and dropped one at a
/// time. Nothing accumulates across lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    pub product: String,
    pub version: Version,
    pub commit: String,
}

/// Release names look like `actyx-1.2.3` or `node-manager-0.4.1`: the product
/// may itself contain hyphens, so the version is anchored at the end.
fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.+)-(\d+\.\d+\.\d+)$").expect("release name pattern"))
}

impl VersionEntry {
    /// Parse one versions-file line.
    ///
    /// The line must be `<product>-<major>.<minor>.<patch> <commit>` with
    /// exactly one space. `line_no` is the 1-based file line number, used in
    /// error messages only.
    ///
    /// Both failure modes are fatal for the whole batch; the caller must not
    /// skip the line and carry on.
    pub fn parse(line: &str, line_no: usize) -> Result<Self> {
        let trimmed = line.trim();

        // Exactly one space per line. A commit hash never contains one, so a
        // second space means the line is not ours to interpret.
        if trimmed.matches(' ').count() != 1 {
            return Err(BatchTagError::MalformedLine {
                line: line_no,
                content: trimmed.to_string(),
            });
        }

        let (name, commit) = trimmed.split_once(' ').ok_or_else(|| {
            BatchTagError::MalformedLine {
                line: line_no,
                content: trimmed.to_string(),
            }
        })?;

        let captures =
            name_regex()
                .captures(name)
                .ok_or_else(|| BatchTagError::UnparseableName {
                    line: line_no,
                    name: name.to_string(),
                })?;

        let version = Version::parse(&captures[2]).map_err(|_| BatchTagError::UnparseableName {
            line: line_no,
            name: name.to_string(),
        })?;

        Ok(VersionEntry {
            product: captures[1].to_string(),
            version,
            commit: commit.to_string(),
        })
    }

    /// Name of the tag created for this entry: `<product>/<version>`.
    pub fn tag_name(&self) -> String {
        format!("{}/{}", self.product, self.version)
    }
}

impl fmt::Display for VersionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {}", self.product, self.version, self.commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<VersionEntry> {
        VersionEntry::parse(line, 6)
    }

    #[test]
    fn test_parse_simple_entry() {
        let entry = parse("foo-1.0.0 abc123").unwrap();
        assert_eq!(entry.product, "foo");
        assert_eq!(entry.version, Version::new(1, 0, 0));
        assert_eq!(entry.commit, "abc123");
    }

    #[test]
    fn test_parse_hyphenated_product() {
        let entry = parse("node-manager-1.2.3 cafef00d").unwrap();
        assert_eq!(entry.product, "node-manager");
        assert_eq!(entry.version, Version::new(1, 2, 3));
    }

    #[test]
    fn test_product_keeps_everything_before_version_suffix() {
        let entry = parse("csharp-sdk-9.9.9 cafef00d").unwrap();
        assert_eq!(entry.product, "csharp-sdk");
        assert_eq!(entry.version, Version::new(9, 9, 9));
    }

    #[test]
    fn test_parse_trims_line_terminator() {
        let entry = parse("foo-1.0.0 abc123\n").unwrap();
        assert_eq!(entry.commit, "abc123");
    }

    #[test]
    fn test_name_without_version_is_unparseable() {
        let err = parse("weird_name_no_version abc123").unwrap_err();
        match err {
            BatchTagError::UnparseableName { line, name } => {
                assert_eq!(line, 6);
                assert_eq!(name, "weird_name_no_version");
            }
            other => panic!("expected UnparseableName, got {:?}", other),
        }
    }

    #[test]
    fn test_two_component_version_is_unparseable() {
        assert!(matches!(
            parse("item-1.2 abc123"),
            Err(BatchTagError::UnparseableName { .. })
        ));
    }

    #[test]
    fn test_four_component_version_is_unparseable() {
        assert!(matches!(
            parse("item-1.2.3.4 abc123"),
            Err(BatchTagError::UnparseableName { .. })
        ));
    }

    #[test]
    fn test_line_without_space_is_malformed() {
        assert!(matches!(
            parse("foo-1.0.0"),
            Err(BatchTagError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_line_with_two_spaces_is_malformed() {
        assert!(matches!(
            parse("foo-1.0.0 abc 123"),
            Err(BatchTagError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_blank_line_is_malformed() {
        assert!(matches!(
            parse(""),
            Err(BatchTagError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_tag_name() {
        let entry = parse("actyx-2.0.1 deadbeef").unwrap();
        assert_eq!(entry.tag_name(), "actyx/2.0.1");
    }

    #[test]
    fn test_display_round_trips_the_line() {
        let entry = parse("node-manager-1.2.3 cafef00d").unwrap();
        assert_eq!(entry.to_string(), "node-manager-1.2.3 cafef00d");
    }
}
