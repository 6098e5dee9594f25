use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use zip::ZipArchive;
use crate::catalog::CatalogEntry;
use crate::config::write_loader_config;
use crate::net::http_get;

/// Fixed location of the patch bundle: a zip of the bundle repository's
/// default branch, not a per-game artifact.
pub const BUNDLE_URL: &str =
    "https://github.com/marhau-dev/steam-game-patcher/archive/refs/heads/main.zip";
/// Name of the temporary archive file written into the target directory.
pub const BUNDLE_ARCHIVE_NAME: &str = "steam-game-patcher.zip";
/// The one top-level directory the archive extracts into, fixed by the
/// bundle repository's name.
pub const BUNDLE_ROOT_DIR: &str = "steam-game-patcher-main";

/// The game folder an install writes into.
#[derive(Debug, Clone)]
pub struct InstallTarget {
    /// An existing, writable directory. Callers select and validate it; the
    /// pipeline never creates it.
    pub directory: PathBuf,
    /// File name of the game executable directly inside `directory`.
    pub executable: String,
}

/// Everything one install run needs.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub target: InstallTarget,
    /// The catalog entry chosen for the executable. Callers construct a
    /// request only from a candidate the executable actually resolved to.
    pub entry: CatalogEntry,
}

/// The pipeline stage an install failed in.
///
/// Archive cleanup after extraction is best-effort and never fails an
/// install, which is why it has no stage of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Download,
    Extract,
    Merge,
    WriteConfig,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Download => "download",
            Stage::Extract => "extract",
            Stage::Merge => "merge",
            Stage::WriteConfig => "write-config",
        };
        f.write_str(name)
    }
}

/// A failed install, tagged with the stage that aborted the pipeline.
#[derive(Debug, Error)]
#[error("install failed during the {stage} stage")]
pub struct InstallError {
    pub stage: Stage,
    #[source]
    pub cause: Box<dyn std::error::Error + Send + Sync>,
}

impl InstallError {
    fn at(stage: Stage, cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        InstallError {
            stage,
            cause: cause.into(),
        }
    }
}

/// Runs the full install pipeline against a prepared target.
///
/// Stages run strictly in order, each blocking until done: download the
/// bundle archive into the target directory, extract it there, drop the
/// archive file, merge the extracted tree into the target directory, write
/// the loader configuration. The first failing stage aborts the rest and is
/// named in the returned error; nothing earlier stages wrote is rolled back.
pub fn install(request: &InstallRequest) -> Result<(), InstallError> {
    let archive = download_bundle(&request.target.directory)?;
    install_from_archive(request, &archive)
}

/// Runs the post-download stages against a bundle archive already on disk.
///
/// Split out of [`install`] so the extract/merge/config sequence can also be
/// driven from a locally provided archive.
pub fn install_from_archive(request: &InstallRequest, archive: &Path) -> Result<(), InstallError> {
    let target = &request.target.directory;

    extract_bundle(archive, target)?;
    discard_archive(archive);

    let staged = target.join(BUNDLE_ROOT_DIR);
    merge_tree(&staged, target).map_err(|e| InstallError::at(Stage::Merge, e))?;
    fs::remove_dir_all(&staged).map_err(|e| InstallError::at(Stage::Merge, e))?;
    info!("merged bundle files into {}", target.display());

    write_loader_config(target, &request.target.executable, request.entry.app_id)
        .map_err(|e| InstallError::at(Stage::WriteConfig, e))?;
    Ok(())
}

fn download_bundle(target: &Path) -> Result<PathBuf, InstallError> {
    info!("downloading patch bundle from {BUNDLE_URL}");
    let response = http_get(BUNDLE_URL).map_err(|e| InstallError::at(Stage::Download, e))?;
    let bytes = response
        .bytes()
        .map_err(|e| InstallError::at(Stage::Download, e))?;
    let archive = target.join(BUNDLE_ARCHIVE_NAME);
    // A half-written file from a failed attempt stays behind; the next
    // attempt truncates it.
    fs::write(&archive, &bytes).map_err(|e| InstallError::at(Stage::Download, e))?;
    debug!("wrote {} bytes to {}", bytes.len(), archive.display());
    Ok(archive)
}

fn extract_bundle(archive: &Path, target: &Path) -> Result<(), InstallError> {
    info!("extracting {}", archive.display());
    let file = fs::File::open(archive).map_err(|e| InstallError::at(Stage::Extract, e))?;
    let mut zip = ZipArchive::new(file).map_err(|e| InstallError::at(Stage::Extract, e))?;
    zip.extract(target)
        .map_err(|e| InstallError::at(Stage::Extract, e))?;
    Ok(())
}

/// Best-effort removal of the downloaded archive. Extraction has already
/// succeeded at this point, so a leftover archive must not fail the install.
fn discard_archive(archive: &Path) {
    if let Err(e) = fs::remove_file(archive) {
        warn!("could not remove bundle archive {}: {e}", archive.display());
    }
}

/// Recursively copies the contents of `source` into `dest`.
///
/// Files are copied with [`fs::copy`], which truncates an existing
/// destination file; overwrite-on-conflict is the designed policy here, not
/// an accident of the copy routine. Directories are created as needed.
/// Files that exist only under `dest` are left alone, and `source` itself is
/// not modified or removed.
pub fn merge_tree(source: &Path, dest: &Path) -> io::Result<()> {
    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(io::Error::other)?;
        let to = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&to)?;
        } else {
            fs::copy(entry.path(), &to)?;
        }
    }
    Ok(())
}
