use std::path::Path;

use git2::{Commit, Oid, Repository};

/// Init a scratch repository with `master` as the initial branch and a
/// local signature configured.
pub fn init_repo(dir: &Path) -> Repository {
    let mut opts = git2::RepositoryInitOptions::new();
    opts.initial_head("master");
    let repo = Repository::init_opts(dir, &opts).expect("init repository");

    let mut config = repo.config().expect("repo config");
    config.set_str("user.name", "Backtag Tests").unwrap();
    config.set_str("user.email", "backtag@example.com").unwrap();

    repo
}

/// Commit `content` to `name` on the current branch and return the new
/// commit id.
pub fn commit_file(repo: &Repository, name: &str, content: &str, message: &str) -> Oid {
    let workdir = repo.workdir().expect("repo has a workdir");
    std::fs::write(workdir.join(name), content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let sig = repo.signature().unwrap();
    let parents: Vec<Commit> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => vec![],
    };
    let parent_refs: Vec<&Commit> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

/// Write a versions file with the standard 5-line header followed by
/// `entries` into `dir`.
pub fn write_versions(dir: &Path, entries: &str) {
    let header = "# Last releases of all products\n\
                  # Each line contains <release> <commit-hash>\n\
                  # The machine-readable product names are: actyx, node-manager,\n\
                  # cli, pond, ts-sdk, rust-sdk, docs, csharp-sdk\n\
                  \n";
    std::fs::write(dir.join("versions"), format!("{}{}", header, entries)).unwrap();
}
