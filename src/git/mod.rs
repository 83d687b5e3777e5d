//! Version-control abstraction layer
//!
//! The batch tagger drives exactly two operations on the repository it runs
//! in: moving the working tree to a ref, and tagging the currently
//! checked-out commit. The [Workspace] trait captures those two capabilities
//! so the batch loop can be tested against a recording fake instead of a real
//! repository.
//!
//! Implementations:
//!
//! - [repository::Git2Workspace]: the real thing, backed by the `git2` crate
//! - [mock::MockWorkspace]: a recording fake with injectable failures

pub mod mock;
pub mod repository;

pub use mock::MockWorkspace;
pub use repository::Git2Workspace;

use crate::error::Result;

/// The working tree and tag namespace of the repository being retagged.
///
/// The working tree is a single shared mutable resource; callers must hold
/// exclusive ownership for the duration of a batch run and issue calls
/// strictly sequentially. Implementations block until the operation has
/// completed.
pub trait Workspace {
    /// Move the working tree (and index) to `refname`, which may be a commit
    /// hash or a branch name.
    ///
    /// Failure returns [crate::BatchTagError::CheckoutFailed] naming the ref;
    /// whether that is fatal is the caller's policy.
    fn checkout(&self, refname: &str) -> Result<()>;

    /// Create an annotated tag `name` pointing at the currently checked-out
    /// commit. Fails if the tag already exists.
    fn create_tag(&self, name: &str) -> Result<()>;
}
