//! Static OIDC client settings handed to the browser-side OIDC library.
//! Only configuration lives here; the protocol is the library's job.

use crate::util::trim_base_url;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://192.168.0.79:8080";
pub const BACKEND_URL_ENV: &str = "RANGEPICK_BACKEND_URL";
pub const FRONTEND_URL_ENV: &str = "RANGEPICK_FRONTEND_URL";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    pub issuer: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
    pub end_session_endpoint: String,
    pub jwks_uri: String,
}

/// Authorization-code client config; field names follow the OIDC client's settings keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OidcSettings {
    pub authority: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub post_logout_redirect_uri: String,
    pub response_type: String,
    pub scope: String,
    #[serde(rename = "automaticSilentRenew")]
    pub automatic_silent_renew: bool,
    pub metadata: ProviderMetadata,
}

impl OidcSettings {
    pub fn new(backend_url: &str, frontend_url: &str) -> Self {
        let backend = trim_base_url(backend_url);
        let frontend = trim_base_url(frontend_url);
        Self {
            authority: backend.clone(),
            client_id: "oidc-client".to_string(),
            redirect_uri: format!("{frontend}/login-callback"),
            post_logout_redirect_uri: format!("{frontend}/logout-callback"),
            response_type: "code".to_string(),
            scope: "openid profile".to_string(),
            automatic_silent_renew: false,
            metadata: ProviderMetadata {
                issuer: backend.clone(),
                authorization_endpoint: format!("{backend}/oauth2/authorize"),
                token_endpoint: format!("{backend}/oauth2/token"),
                userinfo_endpoint: format!("{backend}/userinfo"),
                end_session_endpoint: format!("{backend}/connect/logout"),
                jwks_uri: format!("{backend}/oauth2/jwks"),
            },
        }
    }

    /// Backend from `RANGEPICK_BACKEND_URL` (else the default backend), frontend from
    /// `RANGEPICK_FRONTEND_URL` (else `frontend_default`, usually the page origin).
    pub fn from_env(frontend_default: &str) -> Self {
        let backend = env_nonempty(BACKEND_URL_ENV).unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let frontend = env_nonempty(FRONTEND_URL_ENV).unwrap_or_else(|| frontend_default.to_string());
        Self::new(&backend, &frontend)
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
