use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use dump_logging::{dump_debug, dump_info, redact};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use slack_dump_core::{extract_tokens, select_token};

use crate::cookies::SessionCookieStore;
use crate::DumpError;

/// Host serving the Web API (`/api/search.files`).
pub const DEFAULT_API_BASE: &str = "https://slack.com";

/// Name of the browser session cookie.
pub const SESSION_COOKIE: &str = "d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub api_base: String,
    pub user_agent: Option<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: None,
        }
    }
}

/// Authenticated client for one workspace.
///
/// Every request carries the `d` cookie, also after a redirect to another
/// host, the bearer token scraped from the workspace page and, when
/// configured, the user agent override. The headers are fixed at construction.
pub struct WorkspaceSession {
    workspace_url: String,
    token: String,
    api_base: String,
    user_agent: Option<String>,
    client: reqwest::Client,
}

impl fmt::Debug for WorkspaceSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkspaceSession")
            .field("workspace_url", &self.workspace_url)
            .field("token", &redact(&self.token))
            .field("api_base", &self.api_base)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl WorkspaceSession {
    /// Fetches `workspace_url` with the session cookie and derives the API token
    /// from the page body.
    ///
    /// `workspace_url` is used as given; see
    /// [`slack_dump_core::normalize_workspace_url`] for turning user input into
    /// a full URL.
    pub async fn connect(
        workspace_url: impl Into<String>,
        cookie: &str,
        settings: SessionSettings,
    ) -> Result<Self, DumpError> {
        let workspace_url = workspace_url.into();
        let cookies = Arc::new(SessionCookieStore::new(cookie_header(cookie)?));
        let bootstrap = build_client(HeaderMap::new(), cookies.clone())?;

        dump_info!("Fetching workspace page {}", workspace_url);
        let response = bootstrap
            .get(&workspace_url)
            .send()
            .await
            .map_err(|err| map_reqwest_error(&workspace_url, err))?;
        dump_debug!("Workspace page answered {}", response.status());
        let body = response
            .text()
            .await
            .map_err(|err| map_reqwest_error(&workspace_url, err))?;

        let candidates = extract_tokens(&body);
        let token = select_token(&candidates)
            .ok_or_else(|| DumpError::MissingToken {
                workspace_url: workspace_url.clone(),
            })?
            .to_string();
        dump_info!("Derived API token {}", redact(&token));

        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| DumpError::InvalidHeader("Authorization"))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        if let Some(agent) = settings.user_agent.as_deref() {
            let agent =
                HeaderValue::from_str(agent).map_err(|_| DumpError::InvalidHeader("User-Agent"))?;
            headers.insert(USER_AGENT, agent);
        }
        let client = build_client(headers, cookies)?;

        Ok(Self {
            workspace_url,
            token,
            api_base: settings.api_base,
            user_agent: settings.user_agent,
            client,
        })
    }

    pub fn workspace_url(&self) -> &str {
        &self.workspace_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Authenticated GET returning the status and the full body.
    pub(crate) async fn get_bytes(&self, url: &str) -> Result<(StatusCode, Bytes), DumpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| map_reqwest_error(url, err))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| map_reqwest_error(url, err))?;
        Ok((status, body))
    }
}

fn cookie_header(cookie: &str) -> Result<HeaderValue, DumpError> {
    let mut value = HeaderValue::from_str(&format!("{SESSION_COOKIE}={cookie}"))
        .map_err(|_| DumpError::InvalidHeader("Cookie"))?;
    value.set_sensitive(true);
    Ok(value)
}

fn build_client(
    headers: HeaderMap,
    cookies: Arc<SessionCookieStore>,
) -> Result<reqwest::Client, DumpError> {
    reqwest::Client::builder()
        .default_headers(headers)
        .cookie_provider(cookies)
        .build()
        .map_err(|err| DumpError::Network {
            url: String::new(),
            message: err.to_string(),
        })
}

fn map_reqwest_error(url: &str, err: reqwest::Error) -> DumpError {
    if err.is_builder() {
        return DumpError::InvalidUrl {
            url: url.to_string(),
            message: err.to_string(),
        };
    }
    DumpError::Network {
        url: url.to_string(),
        message: err.to_string(),
    }
}
