use std::fs;
use std::io;
use std::path::Path;
use crate::resolve::EXE_SUFFIX;

/// Lists the executables found directly inside `dir`, sorted by name.
///
/// Only regular files whose name ends in [`EXE_SUFFIX`] count; the match is
/// case-sensitive and subdirectories are not descended into. Returns file
/// names, not paths, since callers already hold the directory.
pub fn scan_executables(dir: &Path) -> io::Result<Vec<String>> {
    let mut executables = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        if let Some(name) = file_name.to_str() {
            if name.ends_with(EXE_SUFFIX) && entry.file_type()?.is_file() {
                executables.push(name.to_string());
            }
        }
    }
    executables.sort();
    Ok(executables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_scan_finds_only_executables() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Game.exe"), "").unwrap();
        fs::write(dir.path().join("Launcher.exe"), "").unwrap();
        fs::write(dir.path().join("readme.txt"), "").unwrap();
        fs::write(dir.path().join("steam_api64.dll"), "").unwrap();

        let found = scan_executables(dir.path()).unwrap();
        assert_eq!(found, vec!["Game.exe", "Launcher.exe"]);
    }

    #[test]
    fn test_scan_is_sorted_and_shallow() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.exe"), "").unwrap();
        fs::write(dir.path().join("a.exe"), "").unwrap();
        fs::create_dir(dir.path().join("bin")).unwrap();
        fs::write(dir.path().join("bin").join("nested.exe"), "").unwrap();

        let found = scan_executables(dir.path()).unwrap();
        assert_eq!(found, vec!["a.exe", "b.exe"]);
    }

    #[test]
    fn test_scan_ignores_directories_named_like_executables() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("NotAFile.exe")).unwrap();

        let found = scan_executables(dir.path()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let dir = tempdir().unwrap();
        assert!(scan_executables(&dir.path().join("gone")).is_err());
    }
}
