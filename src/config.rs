use std::collections::HashSet;
use std::path::PathBuf;

/// Product families that never get tags from this tool.
pub const EXCLUDED_PRODUCTS: [&str; 4] = ["csharp-sdk", "ts-sdk", "pond", "rust-sdk"];

/// Number of header lines at the top of the versions file. The header is a
/// fixed-format preamble (comment lines plus a blank separator) and is
/// discarded without being interpreted.
pub const HEADER_LINES: usize = 5;

/// Build-time configuration for the batch tagger.
///
/// There are no CLI flags, environment variables, or config files; everything
/// is fixed here. The values still travel as explicit data (rather than being
/// read at the use sites) so that tests can substitute them.
#[derive(Debug, Clone)]
pub struct TaggerConfig {
    /// Path of the versions file, relative to the current working directory.
    pub versions_path: PathBuf,
    /// Header lines to discard before the first entry.
    pub header_lines: usize,
    /// Branch the working tree is restored to after the batch.
    pub restore_branch: String,
    /// Products whose entries are skipped entirely.
    pub excluded_products: HashSet<String>,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        TaggerConfig {
            versions_path: PathBuf::from("versions"),
            header_lines: HEADER_LINES,
            restore_branch: "master".to_string(),
            excluded_products: EXCLUDED_PRODUCTS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl TaggerConfig {
    /// Whether entries for `product` are skipped.
    pub fn is_excluded(&self, product: &str) -> bool {
        self.excluded_products.contains(product)
    }
}
