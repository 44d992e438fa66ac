//! Capability-based file access for datasets and reports.
//!
//! Every path is resolved against an ambient directory handle from `cap-std`
//! rather than through `std::fs` directly.
#![forbid(unsafe_code)]

use std::io;
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing file for reading.
///
/// # Errors
/// Propagates I/O errors from `cap-std`, including `NotFound`.
pub fn open_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create or truncate `path`, creating missing parent directories first.
///
/// # Errors
/// Propagates I/O errors raised while creating directories or the file.
pub fn create_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_dir_and_name(path)?;
    dir.create(name.as_str())
}

/// Report whether `path` names an existing regular file.
///
/// # Errors
/// Returns `NotFound` when the parent directory or the entry is missing, and
/// any other I/O error raised while reading metadata.
pub fn is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create the parent directory of `path` when it does not exist.
///
/// # Errors
/// Propagates I/O errors raised while opening the base directory or creating
/// the missing components.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }
    let (base, relative) = split_base(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split `parent` into an ambient root handle and the path below it.
fn split_base(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_parent = parent.as_std_path();
    let base = match std_parent.components().next() {
        // Windows drive or UNC prefix.
        Some(Component::Prefix(prefix)) => {
            let prefix = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(prefix).join(std::path::MAIN_SEPARATOR.to_string())
        }
        Some(Component::RootDir) => Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string()),
        _ => Utf8PathBuf::from("."),
    };
    let relative = if base.as_str() == "." {
        parent.to_path_buf()
    } else {
        parent
            .strip_prefix(&base)
            .map_err(|_| io::Error::other("failed to strip base from parent path"))?
            .to_path_buf()
    };
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((dir, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    use rstest::rstest;
    use tempfile::TempDir;

    fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir")
    }

    #[rstest]
    fn create_file_makes_missing_parents() {
        let tmp = TempDir::new().expect("tempdir");
        let target = utf8_root(&tmp).join("output/nested/report.txt");

        let mut file = create_file(&target).expect("create report");
        file.write_all(b"hello").expect("write report");
        drop(file);

        let mut contents = String::new();
        open_file(&target)
            .expect("reopen report")
            .read_to_string(&mut contents)
            .expect("read report");
        assert_eq!(contents, "hello");
    }

    #[rstest]
    fn is_file_distinguishes_directories() {
        let tmp = TempDir::new().expect("tempdir");
        let root = utf8_root(&tmp);
        let file = root.join("places.csv");
        std::fs::write(file.as_std_path(), b"Name\n").expect("write file");

        assert!(is_file(&file).expect("inspect file"));
        assert!(!is_file(&root).expect("inspect directory"));
    }

    #[rstest]
    fn is_file_reports_missing_entries() {
        let tmp = TempDir::new().expect("tempdir");
        let err = is_file(&utf8_root(&tmp).join("absent/places.csv")).expect_err("missing");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
