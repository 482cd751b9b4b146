//! Bulk copy, move, and delete over a selected set of paths.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CoreError;

/// A bulk action over a selection of paths.
///
/// Copy and Move land each entry at `destination/<basename>`, preserving the
/// base name. Delete carries the caller's confirmation signal; without it
/// the whole batch is refused before any path is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOperation {
    Copy { destination: PathBuf },
    Move { destination: PathBuf },
    Delete { confirmed: bool },
}

impl BulkOperation {
    pub fn verb(&self) -> &'static str {
        match self {
            BulkOperation::Copy { .. } => "copy",
            BulkOperation::Move { .. } => "move",
            BulkOperation::Delete { .. } => "delete",
        }
    }
}

/// The recorded outcome of one attempted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub path: PathBuf,
    /// `None` on success, otherwise the item's error detail.
    pub error: Option<String>,
}

impl ItemOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-item accounting for one completed batch, in attempt order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl BulkReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

pub struct BulkFileOp;

impl BulkFileOp {
    /// Applies `operation` to every path independently. A failing item is
    /// recorded in the report and the batch continues with the remaining
    /// items; only precondition violations (empty selection, missing or
    /// invalid destination, unconfirmed delete) fail the whole call, and
    /// those are checked before any path is touched.
    pub fn apply(operation: &BulkOperation, paths: &[PathBuf]) -> Result<BulkReport, CoreError> {
        if paths.is_empty() {
            return Err(CoreError::EmptySelection);
        }
        match operation {
            BulkOperation::Copy { destination } | BulkOperation::Move { destination } => {
                if !destination.is_dir() {
                    return Err(CoreError::DestinationInvalid(destination.clone()));
                }
            }
            BulkOperation::Delete { confirmed } => {
                if !confirmed {
                    return Err(CoreError::DeleteNotConfirmed);
                }
            }
        }

        let mut report = BulkReport::default();
        for path in paths {
            let result = match operation {
                BulkOperation::Copy { destination } => copy_entry(path, destination),
                BulkOperation::Move { destination } => move_entry(path, destination),
                BulkOperation::Delete { .. } => delete_entry(path),
            };
            if let Err(e) = &result {
                tracing::warn!(
                    op = operation.verb(),
                    path = %path.display(),
                    "bulk item failed: {e}"
                );
            }
            report.outcomes.push(ItemOutcome {
                path: path.clone(),
                error: result.err().map(|e| e.to_string()),
            });
        }

        tracing::info!(
            op = operation.verb(),
            succeeded = report.succeeded(),
            failed = report.failed(),
            "bulk operation finished"
        );
        Ok(report)
    }
}

fn target_in(destination: &Path, source: &Path) -> io::Result<PathBuf> {
    let name = source.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "source path has no base name")
    })?;
    Ok(destination.join(name))
}

/// Copies a file, or a directory with its whole subtree, into `destination`.
///
/// The top-level `create_dir` refuses an already existing target, so a
/// directory is never merged into a prior copy. A tree that fails partway is
/// removed again, so a half-written copy is never left looking like a
/// finished one; the removal only ever touches the directory created here.
fn copy_entry(source: &Path, destination: &Path) -> io::Result<()> {
    let target = target_in(destination, source)?;
    if source.is_dir() {
        fs::create_dir(&target)?;
        copy_tree_contents(source, &target).inspect_err(|_| {
            let _ = fs::remove_dir_all(&target);
        })
    } else {
        fs::copy(source, &target).map(|_| ())
    }
}

/// Copies the children of `source` into the freshly created `target`.
fn copy_tree_contents(source: &Path, target: &Path) -> io::Result<()> {
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let child_target = target.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir(&child_target)?;
            copy_tree_contents(&entry.path(), &child_target)?;
        } else {
            fs::copy(entry.path(), &child_target)?;
        }
    }
    Ok(())
}

/// Relocates an entry into `destination`, keeping its base name. Rename is
/// tried first; when that fails (typically across filesystems) the entry is
/// copied and the source removed. Files and folders take the same path.
fn move_entry(source: &Path, destination: &Path) -> io::Result<()> {
    let target = target_in(destination, source)?;
    match fs::rename(source, &target) {
        Ok(()) => Ok(()),
        Err(_) => {
            copy_entry(source, destination)?;
            delete_entry(source)
        }
    }
}

/// Removes a file, or a directory together with all of its contents.
fn delete_entry(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn empty_selection_is_rejected() {
        let err = BulkFileOp::apply(&BulkOperation::Delete { confirmed: true }, &[]).unwrap_err();
        assert!(matches!(err, CoreError::EmptySelection));
    }

    #[test]
    fn unconfirmed_delete_is_refused_before_touching_disk() {
        let dir = TempDir::new().unwrap();
        let victim = dir.path().join("keep.txt");
        write_file(&victim, "data");

        let err = BulkFileOp::apply(
            &BulkOperation::Delete { confirmed: false },
            &[victim.clone()],
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::DeleteNotConfirmed));
        assert!(victim.exists());
    }

    #[test]
    fn missing_destination_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = BulkFileOp::apply(
            &BulkOperation::Copy {
                destination: dir.path().join("nowhere"),
            },
            &[dir.path().join("a.txt")],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::DestinationInvalid(_)));
    }

    #[test]
    fn copy_lands_files_and_subtrees_under_their_basename() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("dest");
        fs::create_dir(&dest).unwrap();
        let file = dir.path().join("a.txt");
        write_file(&file, "hello");
        let tree = dir.path().join("proj");
        write_file(&tree.join("nested/deep.txt"), "deep");

        let report = BulkFileOp::apply(
            &BulkOperation::Copy {
                destination: dest.clone(),
            },
            &[file.clone(), tree.clone()],
        )
        .unwrap();

        assert_eq!(report.succeeded(), 2);
        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "hello");
        assert_eq!(
            fs::read_to_string(dest.join("proj/nested/deep.txt")).unwrap(),
            "deep"
        );
        // Sources are untouched.
        assert!(file.exists());
        assert!(tree.join("nested/deep.txt").exists());
    }

    #[test]
    fn copying_a_folder_onto_an_existing_copy_fails_for_that_item() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("dest");
        let tree = dir.path().join("proj");
        write_file(&tree.join("file.txt"), "x");
        fs::create_dir_all(dest.join("proj")).unwrap();

        let report = BulkFileOp::apply(
            &BulkOperation::Copy {
                destination: dest.clone(),
            },
            &[tree],
        )
        .unwrap();

        assert_eq!(report.failed(), 1);
        assert!(report.outcomes[0].error.is_some());
        // The pre-existing directory at the destination is left alone.
        assert!(dest.join("proj").is_dir());
    }

    #[test]
    fn move_relocates_and_removes_the_source() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("dest");
        fs::create_dir(&dest).unwrap();
        let file = dir.path().join("a.txt");
        write_file(&file, "payload");
        let tree = dir.path().join("proj");
        write_file(&tree.join("inner.txt"), "inner");

        let report = BulkFileOp::apply(
            &BulkOperation::Move {
                destination: dest.clone(),
            },
            &[file.clone(), tree.clone()],
        )
        .unwrap();

        assert_eq!(report.succeeded(), 2);
        assert!(!file.exists());
        assert!(!tree.exists());
        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "payload");
        assert_eq!(
            fs::read_to_string(dest.join("proj/inner.txt")).unwrap(),
            "inner"
        );
    }

    #[test]
    fn a_vanished_path_fails_alone_and_the_batch_continues() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("dest");
        fs::create_dir(&dest).unwrap();
        let present = dir.path().join("present.txt");
        write_file(&present, "here");
        let vanished = dir.path().join("vanished.txt");

        let report = BulkFileOp::apply(
            &BulkOperation::Copy {
                destination: dest.clone(),
            },
            &[vanished.clone(), present.clone()],
        )
        .unwrap();

        assert_eq!(report.outcomes.len(), 2);
        assert!(!report.outcomes[0].succeeded());
        assert_eq!(report.outcomes[0].path, vanished);
        assert!(report.outcomes[1].succeeded());
        assert!(dest.join("present.txt").exists());
    }

    #[test]
    fn delete_removes_a_file_and_a_folder_with_contents() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("loose.txt");
        write_file(&file, "x");
        let tree = dir.path().join("stack");
        write_file(&tree.join("a/b/c.txt"), "x");

        let report = BulkFileOp::apply(
            &BulkOperation::Delete { confirmed: true },
            &[file.clone(), tree.clone()],
        )
        .unwrap();

        assert_eq!(report.succeeded(), 2);
        assert!(!file.exists());
        assert!(!tree.exists());
    }
}
