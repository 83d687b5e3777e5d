use std::cell::RefCell;
use std::collections::HashSet;

use crate::error::{BatchTagError, Result};
use crate::git::Workspace;

/// One recorded call against a [MockWorkspace], in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceCall {
    Checkout(String),
    CreateTag(String),
}

/// Recording [Workspace] fake for testing the batch loop without a real
/// repository.
///
/// Every call is recorded, including ones configured to fail, so tests can
/// assert both ordering and the exact point a run stopped.
pub struct MockWorkspace {
    calls: RefCell<Vec<WorkspaceCall>>,
    failing_checkouts: HashSet<String>,
    failing_tags: HashSet<String>,
}

impl MockWorkspace {
    /// Create a mock where every operation succeeds.
    pub fn new() -> Self {
        MockWorkspace {
            calls: RefCell::new(Vec::new()),
            failing_checkouts: HashSet::new(),
            failing_tags: HashSet::new(),
        }
    }

    /// Make `checkout(refname)` fail.
    pub fn fail_checkout(&mut self, refname: impl Into<String>) {
        self.failing_checkouts.insert(refname.into());
    }

    /// Make `create_tag(name)` fail, e.g. to simulate an existing tag.
    pub fn fail_tag(&mut self, name: impl Into<String>) {
        self.failing_tags.insert(name.into());
    }

    /// All calls issued so far, in order.
    pub fn calls(&self) -> Vec<WorkspaceCall> {
        self.calls.borrow().clone()
    }
}

impl Default for MockWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace for MockWorkspace {
    fn checkout(&self, refname: &str) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(WorkspaceCall::Checkout(refname.to_string()));

        if self.failing_checkouts.contains(refname) {
            return Err(BatchTagError::CheckoutFailed {
                commit: refname.to_string(),
                source: git2::Error::from_str("simulated checkout failure"),
            });
        }
        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(WorkspaceCall::CreateTag(name.to_string()));

        if self.failing_tags.contains(name) {
            return Err(BatchTagError::Git(git2::Error::from_str(
                "simulated tag failure: tag already exists",
            )));
        }
        Ok(())
    }
}
