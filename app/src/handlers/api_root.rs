use std::sync::Arc;

use axum::{
    extract::{Host, State},
    http::HeaderMap,
    Json,
};
use serde_json::{json, Value};

use crate::{config::config::Config, core::state::AppState};

const RESOURCES: [&str; 5] = ["users", "teams", "activities", "workouts", "leaderboard"];

/// Directory of absolute URLs to the resource collections.
///
/// Prefer building URLs from the Codespace name when one is configured, to
/// avoid certificate issues when the request host differs from the Codespace
/// forwarded-port URL. Otherwise fall back to the request's own scheme/host.
pub async fn api_root(
    State(state): State<Arc<AppState>>,
    Host(host): Host,
    headers: HeaderMap,
) -> Json<Value> {
    let secure = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .map(|proto| proto == "https")
        .unwrap_or(false);

    let base = resolve_api_base(&state.config, secure, &host);

    let urls: Value = RESOURCES
        .iter()
        .map(|resource| (resource.to_string(), json!(format!("{}/{}/", base, resource))))
        .collect::<serde_json::Map<String, Value>>()
        .into();

    Json(urls)
}

/// Base URL shared by every resource link, without the trailing slash.
pub fn resolve_api_base(config: &Config, secure: bool, host: &str) -> String {
    if let Some(codespace) = &config.codespace_name {
        format!(
            "https://{}-{}.{}/api",
            codespace, config.port, config.codespace_domain
        )
    } else {
        let scheme = if secure { "https" } else { "http" };
        format!("{}://{}/api", scheme, host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codespace_name_takes_precedence_over_request_host() {
        let mut config = Config::test_default();
        config.codespace_name = Some("foo".to_string());

        let base = resolve_api_base(&config, false, "example.com");

        assert_eq!(base, "https://foo-8000.app.github.dev/api");
    }

    #[test]
    fn falls_back_to_request_host_and_scheme() {
        let config = Config::test_default();

        assert_eq!(
            resolve_api_base(&config, false, "example.com"),
            "http://example.com/api"
        );
        assert_eq!(
            resolve_api_base(&config, true, "example.com"),
            "https://example.com/api"
        );
    }

    #[test]
    fn codespace_domain_is_configurable() {
        let mut config = Config::test_default();
        config.codespace_name = Some("foo".to_string());
        config.codespace_domain = "preview.example.dev".to_string();
        config.port = 9000;

        assert_eq!(
            resolve_api_base(&config, false, "ignored"),
            "https://foo-9000.preview.example.dev/api"
        );
    }

    #[test]
    fn every_resource_url_ends_with_its_collection_path() {
        let config = Config::test_default();
        let base = resolve_api_base(&config, false, "example.com");

        for resource in RESOURCES {
            let url = format!("{}/{}/", base, resource);
            assert!(url.ends_with(&format!("/api/{}/", resource)));
        }
    }
}
