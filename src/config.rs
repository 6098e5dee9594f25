use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the generated loader configuration.
pub const LOADER_CONFIG_NAME: &str = "ColdClientLoader.ini";

/// Renders the loader configuration for one executable/app-id pair.
///
/// The downstream loader parses this file, so the section header, key order,
/// dll file names and the empty `ExeCommandLine` value are reproduced byte
/// for byte. The output depends on nothing but the two arguments.
pub fn render_loader_config(executable: &str, app_id: u32) -> String {
    format!(
        "[SteamClient]\n\
         Exe = {executable}\n\
         ExeRunDir = .\n\
         ExeCommandLine = \n\
         AppId = {app_id}\n\
         SteamClientDll = steamclient.dll\n\
         SteamClient64Dll = steamclient64.dll\n"
    )
}

/// Writes the loader configuration into `dir`, truncating any previous one.
///
/// Returns the path of the written file.
pub fn write_loader_config(dir: &Path, executable: &str, app_id: u32) -> io::Result<PathBuf> {
    let path = dir.join(LOADER_CONFIG_NAME);
    fs::write(&path, render_loader_config(executable, app_id))?;
    info!("wrote {}", path.display());
    Ok(path)
}
