use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// JSON document with the application list. Sample data is shown when unset.
    #[serde(default, alias = "APPLICATIONS_URL")]
    pub applications_url: Option<String>,
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn parse_runtime_config(raw: &str) -> anyhow::Result<RuntimeConfig> {
    let mut cfg: RuntimeConfig =
        serde_json::from_str(raw).context("config.json is not a valid runtime config")?;
    cfg.applications_url = cfg.applications_url.as_deref().and_then(normalize_url);
    Ok(cfg)
}

/// Blank values mean "no feed configured".
fn normalize_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    (!url.is_empty()).then(|| url.to_string())
}

#[cfg(target_arch = "wasm32")]
fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
        .and_then(|v| normalize_url(&v))
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // window.__APPROVALS_ENV (env.js) wins over window.__APPROVALS_CONFIG.
    let url = read_global("__APPROVALS_ENV", ["APPLICATIONS_URL", "applications_url"]).or_else(
        || read_global("__APPROVALS_CONFIG", ["applications_url", "APPLICATIONS_URL"]),
    )?;
    Some(RuntimeConfig {
        applications_url: Some(url),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

/// reqwest needs absolute URLs; paths are resolved against the page origin.
pub fn absolute_url(origin: Option<&str>, raw: &str) -> String {
    if raw.contains("://") {
        return raw.to_string();
    }
    match origin {
        Some(origin) => format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            raw.trim_start_matches("./").trim_start_matches('/')
        ),
        None => raw.to_string(),
    }
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = page_origin()?;
    let resp = reqwest::get(absolute_url(Some(&origin), "./config.json"))
        .await
        .ok()?;
    if !resp.status().is_success() {
        return None;
    }
    let raw = resp.text().await.ok()?;
    match parse_runtime_config(&raw) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("ignoring runtime config: {:#}", err);
            None
        }
    }
}

fn resolve_applications_url(origin: Option<&str>, raw: Option<&str>) -> Option<String> {
    raw.and_then(normalize_url)
        .map(|url| absolute_url(origin, &url))
}

fn cache(mut cfg: RuntimeConfig) -> RuntimeConfig {
    let origin = page_origin();
    cfg.applications_url =
        resolve_applications_url(origin.as_deref(), cfg.applications_url.as_deref());
    RUNTIME_CONFIG.get_or_init(|| cfg).clone()
}

pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache(existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        return cache(cfg);
    }
    cache(RuntimeConfig::default())
}

pub async fn init() {
    let cfg = await_runtime_config().await;
    match cfg.applications_url {
        Some(url) => log::info!("applications will be loaded from {}", url),
        None => log::info!("no applications_url configured; using sample data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lower_and_upper_case_keys() {
        let cfg = parse_runtime_config(r#"{"applications_url":"/data/apps.json"}"#).unwrap();
        assert_eq!(cfg.applications_url.as_deref(), Some("/data/apps.json"));
        let cfg = parse_runtime_config(r#"{"APPLICATIONS_URL":"/a.json"}"#).unwrap();
        assert_eq!(cfg.applications_url.as_deref(), Some("/a.json"));
    }

    #[test]
    fn blank_url_means_sample_data() {
        let cfg = parse_runtime_config(r#"{"applications_url":"   "}"#).unwrap();
        assert_eq!(cfg, RuntimeConfig::default());
        assert_eq!(parse_runtime_config("{}").unwrap(), RuntimeConfig::default());
    }

    #[test]
    fn blank_global_values_do_not_become_a_feed() {
        assert_eq!(normalize_url(""), None);
        assert_eq!(normalize_url(" \t"), None);
        assert_eq!(normalize_url(" /apps.json "), Some("/apps.json".to_string()));

        let origin = Some("https://apps.example.com");
        assert_eq!(resolve_applications_url(origin, Some("")), None);
        assert_eq!(resolve_applications_url(origin, None), None);
        assert_eq!(
            resolve_applications_url(origin, Some(" /apps.json")).as_deref(),
            Some("https://apps.example.com/apps.json")
        );
    }

    #[test]
    fn resolves_relative_urls_against_origin() {
        let origin = Some("https://apps.example.com/");
        assert_eq!(
            absolute_url(origin, "/data/apps.json"),
            "https://apps.example.com/data/apps.json"
        );
        assert_eq!(
            absolute_url(origin, "./config.json"),
            "https://apps.example.com/config.json"
        );
        assert_eq!(
            absolute_url(origin, "http://api.local/apps"),
            "http://api.local/apps"
        );
        assert_eq!(absolute_url(None, "/apps.json"), "/apps.json");
    }

    #[test]
    fn invalid_json_reports_context() {
        let err = parse_runtime_config("not json").unwrap_err();
        assert!(format!("{:#}", err).contains("config.json"));
    }
}
