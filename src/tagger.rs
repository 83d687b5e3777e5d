use crate::config::TaggerConfig;
use crate::error::Result;
use crate::git::Workspace;
use crate::ui;
use crate::versions_file::VersionsFile;

/// The batch loop: read the versions file, and for each non-excluded entry
/// check out its commit and tag it `<product>/<version>`. After the last
/// entry, restore the working tree to the configured branch.
///
/// Strictly sequential; the working tree is a single shared mutable resource
/// and every workspace call blocks until complete before the next line is
/// touched.
pub struct BatchTagger<'a, W: Workspace> {
    workspace: &'a W,
    config: &'a TaggerConfig,
}

impl<'a, W: Workspace> BatchTagger<'a, W> {
    pub fn new(workspace: &'a W, config: &'a TaggerConfig) -> Self {
        BatchTagger { workspace, config }
    }

    /// Run the whole batch.
    ///
    /// Fatal conditions (input acquisition, parsing, checkout) abort the run
    /// where they occur: entries already processed keep their tags, later
    /// entries are never touched, and the restore checkout does not happen.
    /// Tag creation is best-effort; its failures are reported and tolerated.
    pub fn run(&self) -> Result<()> {
        let file = VersionsFile::load(&self.config.versions_path, self.config.header_lines)?;

        for entry in file.entries() {
            let entry = entry?;

            if self.config.is_excluded(&entry.product) {
                continue;
            }

            ui::display_progress(&entry);

            self.workspace.checkout(&entry.commit)?;

            let tag = entry.tag_name();
            best_effort(self.workspace.create_tag(&tag), &tag);
        }

        self.workspace.checkout(&self.config.restore_branch)?;

        Ok(())
    }
}

/// Result policy for tag creation: an already-existing tag is not worth
/// aborting the batch over, so failures are reported and dropped.
fn best_effort(result: Result<()>, tag: &str) {
    if let Err(e) = result {
        ui::display_status(&format!("could not create tag '{}': {}", tag, e));
    }
}
