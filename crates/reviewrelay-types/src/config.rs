//! Relay configuration snapshot.
//!
//! The deployment drives everything through environment variables (plus a
//! `.env` file loaded by the binary). [`RelayConfig`] reads them once at
//! startup into an explicit struct so the handlers never touch the process
//! environment and the presence checks are testable in isolation.
//!
//! Credential-bearing values are wrapped in [`secrecy::SecretString`] so
//! they never appear in `Debug` output or tracing logs. They are exposed
//! only when the forwarding payload is assembled.

use secrecy::{ExposeSecret, SecretString};

/// `MASTRA_API_URL` -- base URL of the Mastra API.
pub const ENV_MASTRA_API_URL: &str = "MASTRA_API_URL";
/// `GITLAB_ACCESS_TOKEN` -- GitLab personal access token (required).
pub const ENV_GITLAB_ACCESS_TOKEN: &str = "GITLAB_ACCESS_TOKEN";
/// `DINGTALK_WEBHOOK_URL` -- DingTalk robot webhook (required).
pub const ENV_DINGTALK_WEBHOOK_URL: &str = "DINGTALK_WEBHOOK_URL";
/// `GITLAB_PROJECT_ID` -- numeric GitLab project id (required).
pub const ENV_GITLAB_PROJECT_ID: &str = "GITLAB_PROJECT_ID";
/// `GITLAB_WEBHOOK_SECRET` -- webhook secret token (optional).
pub const ENV_GITLAB_WEBHOOK_SECRET: &str = "GITLAB_WEBHOOK_SECRET";
/// `GITLAB_URL` -- base URL of the GitLab instance.
pub const ENV_GITLAB_URL: &str = "GITLAB_URL";
/// `DINGTALK_SECRET` -- DingTalk signing secret (optional).
pub const ENV_DINGTALK_SECRET: &str = "DINGTALK_SECRET";

/// Default Mastra API address when `MASTRA_API_URL` is unset.
pub const DEFAULT_MASTRA_API_URL: &str = "http://localhost:4111";
/// Default GitLab instance when `GITLAB_URL` is unset.
pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";

/// Configuration read once at startup and shared with every handler.
///
/// Optional fields stay `None` when the variable is unset or empty; the
/// forwarding path refuses to run without the three required ones (see
/// [`RelayConfig::required`]).
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Base URL of the Mastra API, e.g. `http://localhost:4111`.
    pub mastra_api_url: String,
    /// GitLab personal access token the review workflow acts with.
    pub gitlab_access_token: Option<SecretString>,
    /// DingTalk robot webhook the review results are pushed to.
    pub dingtalk_webhook_url: Option<String>,
    /// GitLab project id, kept as the raw string until forwarding.
    pub gitlab_project_id: Option<String>,
    /// Webhook secret token. Forwarded to the workflow as-is; this service
    /// does not compare it against the inbound `x-gitlab-token` header.
    pub gitlab_webhook_secret: Option<SecretString>,
    /// Base URL of the GitLab instance the webhooks originate from.
    pub gitlab_url: String,
    /// DingTalk signing secret, forwarded alongside the webhook URL.
    pub dingtalk_secret: Option<SecretString>,
}

/// Borrowed view of the values the forwarding path cannot run without.
#[derive(Debug, Clone, Copy)]
pub struct RequiredConfig<'a> {
    pub access_token: &'a str,
    pub dingtalk_webhook: &'a str,
    pub project_id: &'a str,
}

impl RelayConfig {
    /// Snapshot the relay configuration from the process environment.
    ///
    /// Unset and empty variables are treated the same: absent.
    pub fn from_env() -> Self {
        Self {
            mastra_api_url: env_or(ENV_MASTRA_API_URL, DEFAULT_MASTRA_API_URL),
            gitlab_access_token: env_opt(ENV_GITLAB_ACCESS_TOKEN).map(SecretString::from),
            dingtalk_webhook_url: env_opt(ENV_DINGTALK_WEBHOOK_URL),
            gitlab_project_id: env_opt(ENV_GITLAB_PROJECT_ID),
            gitlab_webhook_secret: env_opt(ENV_GITLAB_WEBHOOK_SECRET).map(SecretString::from),
            gitlab_url: env_or(ENV_GITLAB_URL, DEFAULT_GITLAB_URL),
            dingtalk_secret: env_opt(ENV_DINGTALK_SECRET).map(SecretString::from),
        }
    }

    /// Check the three required values in their fixed order -- access
    /// token, DingTalk webhook, project id -- and hand back a borrowed
    /// view of them.
    ///
    /// `Err` carries the environment variable name of the first value
    /// that is unset or empty, for the `400` error body.
    pub fn required(&self) -> Result<RequiredConfig<'_>, &'static str> {
        let access_token = self
            .gitlab_access_token
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|t| !t.is_empty())
            .ok_or(ENV_GITLAB_ACCESS_TOKEN)?;
        let dingtalk_webhook = self
            .dingtalk_webhook_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(ENV_DINGTALK_WEBHOOK_URL)?;
        let project_id = self
            .gitlab_project_id
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(ENV_GITLAB_PROJECT_ID)?;

        Ok(RequiredConfig {
            access_token,
            dingtalk_webhook,
            project_id,
        })
    }
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> RelayConfig {
        RelayConfig {
            mastra_api_url: DEFAULT_MASTRA_API_URL.to_string(),
            gitlab_access_token: Some(SecretString::from("glpat-test")),
            dingtalk_webhook_url: Some("https://oapi.dingtalk.com/robot/send".to_string()),
            gitlab_project_id: Some("42".to_string()),
            gitlab_webhook_secret: None,
            gitlab_url: DEFAULT_GITLAB_URL.to_string(),
            dingtalk_secret: None,
        }
    }

    #[test]
    fn required_passes_when_all_present() {
        let config = full_config();
        let required = config.required().unwrap();
        assert_eq!(required.access_token, "glpat-test");
        assert_eq!(required.dingtalk_webhook, "https://oapi.dingtalk.com/robot/send");
        assert_eq!(required.project_id, "42");
    }

    #[test]
    fn required_names_missing_access_token_first() {
        let mut config = full_config();
        config.gitlab_access_token = None;
        // DingTalk webhook is also missing, but the access token is
        // checked first.
        config.dingtalk_webhook_url = None;
        assert_eq!(config.required().unwrap_err(), ENV_GITLAB_ACCESS_TOKEN);
    }

    #[test]
    fn required_names_missing_dingtalk_webhook() {
        let mut config = full_config();
        config.dingtalk_webhook_url = None;
        assert_eq!(config.required().unwrap_err(), ENV_DINGTALK_WEBHOOK_URL);
    }

    #[test]
    fn required_names_missing_project_id() {
        let mut config = full_config();
        config.gitlab_project_id = None;
        assert_eq!(config.required().unwrap_err(), ENV_GITLAB_PROJECT_ID);
    }

    #[test]
    fn required_treats_empty_string_as_missing() {
        let mut config = full_config();
        config.gitlab_project_id = Some(String::new());
        assert_eq!(config.required().unwrap_err(), ENV_GITLAB_PROJECT_ID);
    }

    #[test]
    fn from_env_defaults_then_overrides() {
        // Single test so the variable is not mutated concurrently.
        // SAFETY: only this test touches MASTRA_API_URL / GITLAB_URL, and
        // it restores the unset state before returning.
        unsafe { std::env::remove_var(ENV_MASTRA_API_URL) };
        unsafe { std::env::remove_var(ENV_GITLAB_URL) };
        let config = RelayConfig::from_env();
        assert_eq!(config.mastra_api_url, DEFAULT_MASTRA_API_URL);
        assert_eq!(config.gitlab_url, DEFAULT_GITLAB_URL);

        // SAFETY: see above.
        unsafe { std::env::set_var(ENV_MASTRA_API_URL, "http://mastra.internal:4111") };
        let config = RelayConfig::from_env();
        assert_eq!(config.mastra_api_url, "http://mastra.internal:4111");
        // SAFETY: see above.
        unsafe { std::env::remove_var(ENV_MASTRA_API_URL) };
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let mut config = full_config();
        config.gitlab_webhook_secret = Some(SecretString::from("hush"));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("glpat-test"));
        assert!(!rendered.contains("hush"));
    }
}
