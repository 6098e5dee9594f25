use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use crate::net::{http_get, NetworkError};

/// Fixed endpoint serving the full Steam app catalog as one JSON document.
pub const APP_LIST_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v0002/";

/// One entry of the remote app catalog.
///
/// Ids are assigned by Steam and unique; names are not unique and are only
/// ever compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    /// The numeric Steam app id.
    #[serde(rename = "appid")]
    pub app_id: u32,
    /// The display name of the app.
    pub name: String,
}

/// Response layout of the catalog endpoint: `{"applist": {"apps": [...]}}`.
#[derive(Debug, Deserialize)]
struct AppListResponse {
    applist: AppList,
}

#[derive(Debug, Deserialize)]
struct AppList {
    apps: Vec<CatalogEntry>,
}

/// A catalog fetch that produced no entries.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    /// The endpoint answered 200 but the body was not the expected document.
    #[error("malformed app list response")]
    Decode(#[from] serde_json::Error),
}

/// Fetches the full app catalog from [`APP_LIST_URL`].
///
/// Every call re-fetches the whole document; there is no caching and no
/// retry. The catalog is small enough to transfer fully, and resolution only
/// needs a point-in-time snapshot.
///
/// # Errors
///
/// Returns [`CatalogError::Network`] on transport failures or non-success
/// statuses, and [`CatalogError::Decode`] if the body is not the documented
/// `applist.apps` layout. Callers that only present candidates are expected
/// to treat any of these as "zero candidates" rather than a crash.
///
/// # Example
///
/// ```no_run
/// use steampatch::catalog::fetch_catalog;
///
/// let catalog = fetch_catalog().unwrap();
/// assert!(catalog.iter().any(|entry| entry.name.contains("Portal")));
/// ```
pub fn fetch_catalog() -> Result<Vec<CatalogEntry>, CatalogError> {
    let response = http_get(APP_LIST_URL)?;
    let body = response
        .text()
        .map_err(|e| NetworkError::transport(APP_LIST_URL, e))?;
    let parsed: AppListResponse = serde_json::from_str(&body)?;
    debug!("fetched {} catalog entries", parsed.applist.apps.len());
    Ok(parsed.applist.apps)
}
