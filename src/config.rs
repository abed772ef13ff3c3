//! Client configuration file (`config.json`).

use std::fs;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "GLOWVIEW_CONFIG";
const CONFIG_DIR: &str = ".glowview";
const CONFIG_FILE: &str = "config.json";

/// Deep-link type codes understood by the host app.
const NOTICE_LINK_TYPE: u32 = 19;
const PROFILE_LINK_TYPE: u32 = 11;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub version: u32,
    pub base_url: String,
    /// Notices requested per page.
    pub page_size: NonZeroU32,
    /// Prefix of app-internal navigation URIs.
    pub app_link_base: String,
    /// Screen shown after any transport failure.
    pub error_path: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: "http://localhost:8000".to_string(),
            page_size: NonZeroU32::new(20).unwrap_or(NonZeroU32::MIN),
            app_link_base: "glowpick://glowpick.com".to_string(),
            error_path: "/webview/error/".to_string(),
            user_agent: "glowview".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ClientConfig {
    /// `$GLOWVIEW_CONFIG`, else `~/.glowview/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Reads `explicit` if given; otherwise the default path, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::read(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::read(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", path.display()))?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self).context("serialize config")?;
        write_atomic(path, &bytes).with_context(|| format!("write {}", path.display()))
    }

    pub fn init(path: &Path, force: bool) -> Result<Self> {
        if path.exists() && !force {
            return Err(anyhow!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ));
        }
        let cfg = Self::default();
        cfg.write(path)?;
        Ok(cfg)
    }

    pub fn error_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.error_path)
    }

    pub fn notice_link(&self, notice_id: u64) -> String {
        format!(
            "{}?type={}&code={}",
            self.app_link_base, NOTICE_LINK_TYPE, notice_id
        )
    }

    pub fn profile_saved_link(&self) -> String {
        format!("{}?type={}&code=", self.app_link_base, PROFILE_LINK_TYPE)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
