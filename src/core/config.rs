use std::env;

use crate::chat::ResolverKind;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_path: String,
    pub db_path: String,
    // School data API the proxy routes forward to
    pub upstream_api_url: String,
    // Base URL of a running proxy (this server) used by the gateway client
    pub proxy_api_url: String,
    pub intent_api_url: String,
    pub resolver: ResolverKind,
}

const PROXY_URL_VAR: &str = "SCHOOLBOT_PROXY_URL";

/// URL for reaching a server bound to `host:port` from the same
/// machine.
pub fn local_proxy_url(host: &str, port: &str) -> String {
    // Wildcard bind addresses can't be connected to
    let host = match host {
        "0.0.0.0" | "::" | "[::]" => "127.0.0.1",
        host => host,
    };
    format!("http://{}:{}", host, port)
}

fn proxy_url_for(explicit: Option<String>, host: &str, port: &str) -> String {
    explicit.unwrap_or_else(|| local_proxy_url(host, port))
}

impl AppConfig {
    /// Point the proxy URL at this server once its address is known.
    /// An explicit `SCHOOLBOT_PROXY_URL` still wins.
    pub fn serving_on(mut self, host: &str, port: &str) -> Self {
        self.proxy_api_url = proxy_url_for(env::var(PROXY_URL_VAR).ok(), host, port);
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let host = "127.0.0.1";
        let port = "2222";
        let storage_path = env::var("SCHOOLBOT_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = format!("{}/db", storage_path);
        let upstream_api_url = env::var("SCHOOLBOT_UPSTREAM_URL")
            .unwrap_or_else(|_| "http://211.188.57.74:8080".to_string());
        let proxy_api_url = proxy_url_for(env::var(PROXY_URL_VAR).ok(), host, port);
        let intent_api_url =
            env::var("SCHOOLBOT_INTENT_URL").unwrap_or_else(|_| upstream_api_url.clone());
        let resolver = env::var("SCHOOLBOT_RESOLVER")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(ResolverKind::Intent);

        Self {
            storage_path,
            db_path,
            upstream_api_url,
            proxy_api_url,
            intent_api_url,
            resolver,
        }
    }
}
