use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing::warn;
use url::Url;

pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";
pub const DEFAULT_CONFIG_FILE: &str = "admin_panel.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub members_url: String,
    pub request_timeout_secs: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            members_url: DEFAULT_MEMBERS_URL.into(),
            request_timeout_secs: 30,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    /// Parsed feed URL; only `http` and `https` are accepted.
    pub fn members_url(&self) -> anyhow::Result<Url> {
        let url = Url::parse(self.members_url.trim())
            .with_context(|| format!("invalid members url '{}'", self.members_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!(
                "members url '{}' must use http or https, got '{}'",
                self.members_url,
                url.scheme()
            );
        }
        Ok(url)
    }

    /// Per-request timeout for the feed client; zero is rejected.
    pub fn request_timeout(&self) -> anyhow::Result<Duration> {
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be at least 1");
        }
        Ok(Duration::from_secs(self.request_timeout_secs))
    }

    /// Applies command line flags, which take precedence over file and
    /// environment values.
    pub fn apply_cli_overrides(&mut self, members_url: Option<String>) {
        if let Some(url) = members_url {
            self.members_url = url;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    members_url: Option<String>,
    request_timeout_secs: Option<u64>,
    log_filter: Option<String>,
}

/// Resolves settings from defaults, then the TOML file, then the environment.
///
/// Without an explicit `config_path` a missing `admin_panel.toml` is fine; an
/// explicit path that cannot be read is an error.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    match fs::read_to_string(&path) {
        Ok(raw) => apply_file_overrides(&mut settings, &raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound && config_path.is_none() => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.members_url {
        settings.members_url = v;
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        if v == 0 {
            bail!("request_timeout_secs must be at least 1");
        }
        settings.request_timeout_secs = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("MEMBERS_URL") {
        settings.members_url = v;
    }
    if let Some(v) = lookup("APP__MEMBERS_URL") {
        settings.members_url = v;
    }

    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(0) => warn!("ignoring APP__REQUEST_TIMEOUT_SECS=0"),
            Ok(parsed) => settings.request_timeout_secs = parsed,
            Err(err) => warn!(value = %v, error = %err, "ignoring invalid APP__REQUEST_TIMEOUT_SECS"),
        }
    }

    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
