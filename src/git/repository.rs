use std::path::Path;

use git2::Repository;

use crate::error::{BatchTagError, Result};
use crate::git::Workspace;

/// [Workspace] implementation backed by a real repository via `git2`.
pub struct Git2Workspace {
    repo: Repository,
}

impl Git2Workspace {
    /// Open or discover the git repository at (or above) `path`.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;

        Ok(Git2Workspace { repo })
    }

    /// Wrap an already-open repository.
    pub fn from_repository(repo: Repository) -> Self {
        Git2Workspace { repo }
    }
}

impl Workspace for Git2Workspace {
    fn checkout(&self, refname: &str) -> Result<()> {
        let fail = |source: git2::Error| BatchTagError::CheckoutFailed {
            commit: refname.to_string(),
            source,
        };

        let (object, reference) = self.repo.revparse_ext(refname).map_err(|e| fail(e))?;

        // Safe (non-force) checkout: a conflicting working tree fails the
        // operation, matching plain `git checkout`.
        self.repo.checkout_tree(&object, None).map_err(|e| fail(e))?;

        // Checking out a branch name moves HEAD onto the branch; checking
        // out a commit hash leaves HEAD detached at that commit.
        match reference.as_ref().filter(|r| r.is_branch()).and_then(|r| r.name()) {
            Some(name) => self.repo.set_head(name).map_err(|e| fail(e))?,
            None => {
                let commit = object.peel_to_commit().map_err(|e| fail(e))?;
                self.repo
                    .set_head_detached(commit.id())
                    .map_err(|e| fail(e))?;
            }
        }

        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        let tagger = self.repo.signature()?;

        self.repo
            .tag(name, head.as_object(), &tagger, name, false)?;

        Ok(())
    }
}
