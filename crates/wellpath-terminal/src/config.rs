use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wellpath_core::models::identity::Identity;
use wellpath_core::models::user::{Role, UserProfile};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_API_URL: &str = "http://localhost/wellpath/api";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 3;

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "WELLPATH_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellpathConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub api_base_url: String,
    /// Seconds between chat refreshes. Added in v1.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// The signed-in user, if any. This is the identity source for every
    /// assessment screen.
    #[serde(default)]
    pub session: Option<StoredSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user_id: u64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub signed_in_at: jiff::Timestamp,
}

impl StoredSession {
    pub fn from_profile(profile: UserProfile) -> Self {
        Self {
            user_id: profile.id,
            email: profile.email,
            name: profile.name,
            role: profile.role,
            signed_in_at: jiff::Timestamp::now(),
        }
    }

    /// Numeric ids are authoritative; the email is the fallback for
    /// accounts the API has not assigned an id to.
    pub fn identity(&self) -> Option<Identity> {
        if self.user_id != 0 {
            return Some(Identity::UserId(self.user_id));
        }
        self.email.parse().ok()
    }
}

impl Default for WellpathConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            api_base_url: DEFAULT_API_URL.to_string(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            session: None,
        }
    }
}

impl WellpathConfig {
    /// Base URL after applying the environment override.
    pub fn effective_api_url(&self) -> String {
        std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.api_base_url.clone())
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_secs.max(1))
    }
}

fn default_poll_interval() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("wellpath"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, or the defaults when the file does not exist.
pub fn load_config_from(path: &Path) -> eyre::Result<WellpathConfig> {
    if !path.exists() {
        return Ok(WellpathConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: WellpathConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

pub fn load_config() -> eyre::Result<WellpathConfig> {
    load_config_from(&config_path()?)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update wellpath."
        ));
    }

    // v0 → v1: `base_url` renamed to `api_base_url`, add poll_interval_secs
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(base_url) = obj.remove("base_url") {
            obj.entry("api_base_url").or_insert(base_url);
        }
        obj.entry("api_base_url")
            .or_insert(serde_json::Value::String(DEFAULT_API_URL.to_string()));
        obj.entry("poll_interval_secs")
            .or_insert(serde_json::Value::Number(DEFAULT_POLL_INTERVAL_SECS.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (api_base_url, poll_interval_secs)");
    }

    Ok(json)
}

pub fn save_config_to(path: &Path, config: &WellpathConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // The session is account data; keep it private to the user.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn save_config(config: &WellpathConfig) -> eyre::Result<()> {
    save_config_to(&config_path()?, config)
}
