use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BugError, Result};

pub const DEFAULT_BZAPI_URL: &str = "https://api-dev.bugzilla.mozilla.org";
pub const DEFAULT_LILY_URL: &str = "http://localhost:12060";
pub const DEFAULT_SOLR_URL: &str = "http://localhost:8983";

/// Project-level config file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "bugrepo.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "BackendConfig::bzapi")]
    pub bzapi: BackendConfig,
    #[serde(default = "BackendConfig::lily")]
    pub lily: BackendConfig,
    #[serde(default = "BackendConfig::solr")]
    pub solr: BackendConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Defaults, then config files, then `BUGREPO_*` environment overrides.
    ///
    /// An explicit path (or `BUGREPO_CONFIG`) replaces the global/project
    /// lookup instead of layering on top of it.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::defaults();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("BUGREPO_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Built-in defaults for every backend.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            bzapi: BackendConfig::bzapi(),
            lily: BackendConfig::lily(),
            solr: BackendConfig::solr(),
            http: HttpConfig::default(),
        }
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("bugrepo/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| BugError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| BugError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.bzapi {
            self.bzapi.merge(patch);
        }
        if let Some(patch) = patch.lily {
            self.lily.merge(patch);
        }
        if let Some(patch) = patch.solr {
            self.solr.merge(patch);
        }
        if let Some(patch) = patch.http {
            self.http.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("BUGREPO_BZAPI_URL") {
            self.bzapi.base_url = value;
        }
        if let Some(value) = env_string("BUGREPO_LILY_URL") {
            self.lily.base_url = value;
        }
        if let Some(value) = env_string("BUGREPO_SOLR_URL") {
            self.solr.base_url = value;
        }
        if let Some(value) = env_u64("BUGREPO_HTTP_TIMEOUT_SECONDS")? {
            self.http.timeout_secs = value;
        }
        if let Some(value) = env_string("BUGREPO_USER_AGENT") {
            self.http.user_agent = value;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (key, backend) in [
            ("bzapi.base_url", &self.bzapi),
            ("lily.base_url", &self.lily),
            ("solr.base_url", &self.solr),
        ] {
            if backend.base_url.trim().is_empty() {
                return Err(BugError::MissingConfig(key.to_string()));
            }
        }
        if self.http.timeout_secs == 0 {
            return Err(BugError::Config(
                "http.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    fn bzapi() -> Self {
        Self {
            base_url: DEFAULT_BZAPI_URL.to_string(),
        }
    }

    fn lily() -> Self {
        Self {
            base_url: DEFAULT_LILY_URL.to_string(),
        }
    }

    fn solr() -> Self {
        Self {
            base_url: DEFAULT_SOLR_URL.to_string(),
        }
    }

    fn merge(&mut self, patch: BackendPatch) {
        if let Some(value) = patch.base_url {
            self.base_url = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpConfig {
    fn merge(&mut self, patch: HttpPatch) {
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
        if let Some(value) = patch.user_agent {
            self.user_agent = value;
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("bugrepo/{}", crate::VERSION)
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub bzapi: Option<BackendPatch>,
    pub lily: Option<BackendPatch>,
    pub solr: Option<BackendPatch>,
    pub http: Option<HttpPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BackendPatch {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct HttpPatch {
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<u64>().map(Some).map_err(|err| {
            BugError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}
