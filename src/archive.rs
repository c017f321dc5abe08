//! Store zip creation.
//!
//! Collect-then-write: the include set is resolved and walked first, so a
//! missing top-level include fails the step before any archive bytes exist.
//! Directory walks prune version-control and tooling directories plus any
//! hidden directory; surviving files are filtered again by entry name right
//! before writing, which also covers top-level file includes.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::PackageConfig;
use crate::error::{EfhError, Result};

/// A file staged for packaging: source path plus its zip entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub path: PathBuf,
    pub entry_name: String,
}

/// Zip entry name for a path relative to the project root.
fn entry_name(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Exclusion check on the final entry name: suffix match, or any path
/// component naming an excluded directory.
fn should_exclude(name: &str, config: &PackageConfig) -> bool {
    if config.exclude_suffixes.iter().any(|s| name.ends_with(s.as_str())) {
        return true;
    }
    name.split('/')
        .any(|part| config.exclude_dirs.iter().any(|d| d.as_str() == part))
}

fn keep_dir(entry: &walkdir::DirEntry, config: &PackageConfig) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !name.starts_with('.') && !config.exclude_dirs.iter().any(|d| d.as_str() == name)
}

/// Resolve the include set into a staged file list.
///
/// Fails with [`EfhError::MissingPath`] if any include entry is absent.
pub fn collect_files(root: &Path, config: &PackageConfig) -> Result<Vec<StagedFile>> {
    let mut staged = Vec::new();

    for include in &config.include {
        let path = root.join(include);
        if !path.exists() {
            return Err(EfhError::MissingPath(path));
        }
        if path.is_file() {
            staged.push(StagedFile {
                path,
                entry_name: include.clone(),
            });
            continue;
        }
        for entry in WalkDir::new(&path)
            .into_iter()
            .filter_entry(|e| keep_dir(e, config))
        {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy();
            if config
                .exclude_suffixes
                .iter()
                .any(|s| file_name.ends_with(s.as_str()))
            {
                continue;
            }
            staged.push(StagedFile {
                entry_name: entry_name(root, entry.path()),
                path: entry.path().to_path_buf(),
            });
        }
    }

    Ok(staged)
}

/// Write staged files into the archive. Returns the number of entries.
pub fn write_archive(
    staged: &[StagedFile],
    zip_path: &Path,
    config: &PackageConfig,
) -> Result<usize> {
    let file = File::create(zip_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut written = 0;
    for staged_file in staged {
        if should_exclude(&staged_file.entry_name, config) {
            continue;
        }
        writer.start_file(staged_file.entry_name.as_str(), options)?;
        let mut source = File::open(&staged_file.path)?;
        io::copy(&mut source, &mut writer)?;
        written += 1;
    }
    writer.finish()?;

    tracing::debug!(entries = written, path = %zip_path.display(), "wrote archive");
    Ok(written)
}

/// Package the extension into `{root}/{archive_name}`.
pub fn create_archive(root: &Path, config: &PackageConfig) -> Result<(PathBuf, usize)> {
    let staged = collect_files(root, config)?;
    let zip_path = root.join(&config.archive_name);
    let written = write_archive(&staged, &zip_path, config)?;
    Ok((zip_path, written))
}
