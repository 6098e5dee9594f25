use crate::catalog::CatalogEntry;

/// Suffix of the executables this tool patches.
///
/// Game folders ship Windows builds (the loader injects `steamclient.dll`),
/// so the suffix stays `.exe` no matter which host runs the tool. Keeping it
/// fixed also keeps resolution results identical across platforms.
pub const EXE_SUFFIX: &str = ".exe";

/// Strips [`EXE_SUFFIX`] from a file name, if present.
///
/// The match is case-sensitive; `"Game.EXE"` is returned unchanged.
pub fn strip_exe_suffix(name: &str) -> &str {
    name.strip_suffix(EXE_SUFFIX).unwrap_or(name)
}

/// Matches an executable name against a catalog snapshot.
///
/// The suffix-stripped name is lower-cased and an entry is a candidate iff
/// it occurs anywhere within the lower-cased entry name. This is deliberately
/// permissive; picking the right entry out of the candidates is the user's
/// job, not the matcher's. Catalog order is preserved and nothing is
/// deduplicated or ranked.
///
/// An empty name (after stripping) matches every entry, since every string
/// contains the empty string.
///
/// # Example
///
/// ```
/// use steampatch::catalog::CatalogEntry;
/// use steampatch::resolve::resolve;
///
/// let catalog = vec![
///     CatalogEntry { app_id: 620, name: "Portal 2".to_string() },
///     CatalogEntry { app_id: 220, name: "Half-Life 2".to_string() },
/// ];
/// let candidates = resolve("portal.exe", &catalog);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].app_id, 620);
/// ```
pub fn resolve(executable: &str, catalog: &[CatalogEntry]) -> Vec<CatalogEntry> {
    let stem = strip_exe_suffix(executable).to_lowercase();
    catalog
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&stem))
        .cloned()
        .collect()
}
