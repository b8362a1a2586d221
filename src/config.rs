use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::domain::entities::roster::PageSize;

pub const ROSTER_ENV: &str = "HRNET_ROSTER";
pub const PAGE_SIZE_ENV: &str = "HRNET_PAGE_SIZE";
const DEFAULT_ROSTER_FILE: &str = "employees.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub roster_path: PathBuf,
    pub page_size: PageSize,
}

impl RosterConfig {
    pub fn from_env() -> Result<Self> {
        let data_dir = default_data_dir()?;
        Ok(Self::from_lookup(&data_dir, |key| std::env::var(key).ok()))
    }

    /// Resolves settings through `lookup`; an unusable page size falls back to the
    /// default with a warning.
    pub fn from_lookup(data_dir: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let roster_path = lookup(ROSTER_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(DEFAULT_ROSTER_FILE));

        let page_size = match lookup(PAGE_SIZE_ENV) {
            Some(raw) => raw.parse::<PageSize>().unwrap_or_else(|err| {
                tracing::warn!(%err, "ignoring {}", PAGE_SIZE_ENV);
                PageSize::default()
            }),
            None => PageSize::default(),
        };

        Self {
            roster_path,
            page_size,
        }
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hrnet", "hrnet")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().to_path_buf())
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(&default_data_dir()?)
}
