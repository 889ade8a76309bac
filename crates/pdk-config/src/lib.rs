//! Layered YAML configuration for ParcelDesk.
//!
//! Operators pass one or more YAML documents in merge order (base first,
//! overrides later). The merged document is canonicalized and hashed so a
//! session can state exactly which configuration it ran with.
//!
//! Credentials are never literal config values. The config names the env
//! vars to read (`auth.credentials_env.email` / `.password`); any leaf string
//! that looks like a real credential aborts the load with
//! CONFIG_SECRET_DETECTED.

use std::fs;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Known secret-like prefixes. If any leaf string value in the effective
/// config starts with one of these, we abort with CONFIG_SECRET_DETECTED.
const SECRET_PREFIXES: &[&str] = &[
    "eyJ",        // JWT (the admin bearer token is one)
    "Bearer ",    // pre-built Authorization header values
    "sk-",        // payment-provider secret keys
    "sk_live",    // Stripe live
    "sk_test",    // Stripe test
    "AKIA",       // AWS access key ID
    "-----BEGIN", // PEM private keys
    "ghp_",       // GitHub PAT
];

// ---------------------------------------------------------------------------
// Loading + hashing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

pub fn load_layered_yaml(paths: &[&str]) -> Result<LoadedConfig> {
    let mut docs: Vec<String> = Vec::new();
    for p in paths {
        let raw =
            fs::read_to_string(p).with_context(|| format!("failed to read yaml path: {p}"))?;
        docs.push(raw);
    }

    let doc_refs: Vec<&str> = docs.iter().map(|s| s.as_str()).collect();
    load_layered_yaml_from_strings(&doc_refs)
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    // Merge in order: earlier docs are base, later docs override.
    let mut merged = serde_json::json!({});
    for raw in yaml_docs {
        let v_yaml: serde_yaml::Value = serde_yaml::from_str(raw).context("invalid yaml")?;
        let v_json = serde_json::to_value(v_yaml).context("yaml->json conversion failed")?;
        merged = deep_merge(merged, v_json);
    }

    enforce_no_secret_literals(&merged, "")?;

    let canonical_json =
        serde_json::to_string(&merged).context("canonical json serialize failed")?;
    let config_hash = sha256_hex(canonical_json.as_bytes());
    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json: merged,
    })
}

fn deep_merge(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Object(mut a_map), Value::Object(b_map)) => {
            for (k, b_val) in b_map {
                let a_val = a_map.remove(&k).unwrap_or(Value::Null);
                a_map.insert(k, deep_merge(a_val, b_val));
            }
            Value::Object(a_map)
        }
        (_, b_other) => b_other,
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn enforce_no_secret_literals(v: &Value, path: &str) -> Result<()> {
    match v {
        Value::Object(map) => {
            for (k, vv) in map {
                let next = format!("{}/{}", path, k.replace('~', "~0").replace('/', "~1"));
                enforce_no_secret_literals(vv, &next)?;
            }
        }
        Value::Array(arr) => {
            for (i, vv) in arr.iter().enumerate() {
                let next = format!("{path}/{i}");
                enforce_no_secret_literals(vv, &next)?;
            }
        }
        Value::String(s) => {
            if looks_like_secret(s) {
                bail!("CONFIG_SECRET_DETECTED leaf={} value=REDACTED", path);
            }
        }
        _ => {}
    }
    Ok(())
}

fn looks_like_secret(s: &str) -> bool {
    let t = s.trim();
    if t.len() < 8 {
        return false;
    }
    SECRET_PREFIXES.iter().any(|p| t.starts_with(p))
}

// ---------------------------------------------------------------------------
// Typed view
// ---------------------------------------------------------------------------

/// The configuration ParcelDesk actually reads. Unknown keys are tolerated;
/// missing sections fall back to defaults, except `api.base_url` which is
/// required.
#[derive(Debug, Clone, Deserialize)]
pub struct DeskConfig {
    pub api: ApiSection,
    #[serde(default)]
    pub auth: AuthSection,
    #[serde(default)]
    pub listing: ListingSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSection {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSection {
    #[serde(default)]
    pub credentials_env: CredentialsEnv,
}

impl Default for AuthSection {
    fn default() -> Self {
        Self {
            credentials_env: CredentialsEnv::default(),
        }
    }
}

/// Names of the env vars holding the admin credentials. The values are read
/// at login time and never stored in the config.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsEnv {
    #[serde(default = "default_email_var")]
    pub email: String,
    #[serde(default = "default_password_var")]
    pub password: String,
}

impl Default for CredentialsEnv {
    fn default() -> Self {
        Self {
            email: default_email_var(),
            password: default_password_var(),
        }
    }
}

fn default_email_var() -> String {
    "PDK_ADMIN_EMAIL".to_string()
}

fn default_password_var() -> String {
    "PDK_ADMIN_PASSWORD".to_string()
}

/// Credential values resolved from the environment. Do not log.
#[derive(Clone)]
pub struct ResolvedCredentials {
    pub email: String,
    pub password: String,
}

impl CredentialsEnv {
    pub fn resolve(&self) -> Result<ResolvedCredentials> {
        let email = std::env::var(&self.email)
            .with_context(|| format!("admin email env var not set: {}", self.email))?;
        let password = std::env::var(&self.password)
            .with_context(|| format!("admin password env var not set: {}", self.password))?;
        Ok(ResolvedCredentials { email, password })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingSection {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ListingSection {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    10
}

impl DeskConfig {
    pub fn from_loaded(loaded: &LoadedConfig) -> Result<Self> {
        let cfg: DeskConfig = serde_json::from_value(loaded.config_json.clone())
            .context("config does not match the expected shape")?;
        if cfg.api.base_url.trim().is_empty() {
            bail!("api.base_url must not be empty");
        }
        if !cfg.api.base_url.starts_with("http://") && !cfg.api.base_url.starts_with("https://") {
            bail!(
                "api.base_url must be an http(s) URL, got: {}",
                cfg.api.base_url
            );
        }
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"
api:
  base_url: "https://api.parceldesk.example"
listing:
  page_size: 25
"#;

    #[test]
    fn overlay_overrides_base() {
        let overlay = r#"
api:
  timeout_secs: 5
"#;
        let loaded = load_layered_yaml_from_strings(&[BASE, overlay]).unwrap();
        let cfg = DeskConfig::from_loaded(&loaded).unwrap();
        assert_eq!(cfg.api.base_url, "https://api.parceldesk.example");
        assert_eq!(cfg.api.timeout_secs, 5);
        assert_eq!(cfg.listing.page_size, 25);
    }

    #[test]
    fn defaults_fill_missing_sections() {
        let loaded = load_layered_yaml_from_strings(&[BASE]).unwrap();
        let cfg = DeskConfig::from_loaded(&loaded).unwrap();
        assert_eq!(cfg.api.timeout_secs, 30);
        assert_eq!(cfg.api.timeout(), Duration::from_secs(30));
        assert_eq!(cfg.auth.credentials_env.email, "PDK_ADMIN_EMAIL");
        assert_eq!(cfg.auth.credentials_env.password, "PDK_ADMIN_PASSWORD");
    }

    #[test]
    fn missing_base_url_is_an_error() {
        let loaded = load_layered_yaml_from_strings(&["listing:\n  page_size: 5\n"]).unwrap();
        assert!(DeskConfig::from_loaded(&loaded).is_err());
    }

    #[test]
    fn non_http_base_url_is_an_error() {
        let loaded =
            load_layered_yaml_from_strings(&["api:\n  base_url: \"ftp://nope\"\n"]).unwrap();
        assert!(DeskConfig::from_loaded(&loaded).is_err());
    }
}
