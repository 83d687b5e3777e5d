use anyhow::{Context, Result};

use git_backtag::config::TaggerConfig;
use git_backtag::git::Git2Workspace;
use git_backtag::tagger::BatchTagger;
use git_backtag::ui;

fn main() -> Result<()> {
    let config = TaggerConfig::default();

    let workspace =
        Git2Workspace::discover(".").context("not inside a git repository")?;

    if let Err(e) = BatchTagger::new(&workspace, &config).run() {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
