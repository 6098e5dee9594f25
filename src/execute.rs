use std::ffi::OsStr;
use std::path::Path;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use tracing::warn;
use steampatch::catalog::fetch_catalog;
use steampatch::installer::{install, InstallRequest, InstallTarget};
use steampatch::resolve::{resolve, EXE_SUFFIX};
use steampatch::util::scan_executables;
use crate::cli::{SteampatchCommand, CLI};

pub fn execute(cli: CLI) -> Result<()> {
    match cli.command {
        SteampatchCommand::Scan { dir } => execute_scan(&dir),
        SteampatchCommand::Search { name } => execute_search(&name),
        SteampatchCommand::Install { dir, exe, app_id } => execute_install(&dir, &exe, app_id),
    }
}

pub fn execute_scan(dir: &Path) -> Result<()> {
    let executables = scan_executables(dir)
        .with_context(|| format!("could not scan {}", dir.display()))?;
    if executables.is_empty() {
        println!("No executables found in {}", dir.display());
        return Ok(());
    }
    for exe in executables {
        println!("{exe}");
    }
    Ok(())
}

pub fn execute_search(name: &str) -> Result<()> {
    let catalog = match fetch_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            // a failed fetch means zero candidates, not a crashed search
            warn!("could not fetch the app catalog: {e}");
            Vec::new()
        }
    };
    let candidates = resolve(name, &catalog);
    if candidates.is_empty() {
        println!("{}", format!("No matches for {name}").yellow());
        return Ok(());
    }
    for entry in candidates {
        println!(
            "{} {}",
            entry.name,
            format!("(app id {})", entry.app_id).dimmed()
        );
    }
    Ok(())
}

pub fn execute_install(dir: &Path, exe: &str, app_id: u32) -> Result<()> {
    let target = locate_target(dir, exe)?;
    let catalog = fetch_catalog().context("could not fetch the app catalog")?;
    let candidates = resolve(exe, &catalog);
    let entry = candidates
        .into_iter()
        .find(|entry| entry.app_id == app_id)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "app id {app_id} is not a candidate for {exe}; run `steampatch search {exe}`"
            )
        })?;

    println!(
        "Patching {} for {} (app id {})",
        target.directory.display(),
        entry.name,
        entry.app_id
    );
    let request = InstallRequest { target, entry };
    install(&request)?;
    println!("{}", "Patch bundle installed.".green());
    Ok(())
}

fn locate_target(dir: &Path, exe: &str) -> Result<InstallTarget> {
    let directory = dir
        .canonicalize()
        .with_context(|| format!("{} is not an existing directory", dir.display()))?;
    if !directory.is_dir() {
        bail!("{} is not a directory", directory.display());
    }
    // the join below resolves `..` and absolute names, so the name must be bare
    if Path::new(exe).file_name() != Some(OsStr::new(exe)) {
        bail!("{exe} is not a plain file name");
    }
    if !exe.ends_with(EXE_SUFFIX) {
        bail!("{exe} does not end in {EXE_SUFFIX}");
    }
    if !directory.join(exe).is_file() {
        bail!("{exe} not found in {}", directory.display());
    }
    Ok(InstallTarget {
        directory,
        executable: exe.to_string(),
    })
}
