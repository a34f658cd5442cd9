use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::HeaderValue;
use reqwest::Url;

use crate::session::SESSION_COOKIE;

/// Sends the `d` session cookie to every host, like a cookie without a domain,
/// next to whatever cookies the servers set during the run.
///
/// A `d` cookie set by a server never replaces the one supplied by the user.
pub(crate) struct SessionCookieStore {
    session: HeaderValue,
    jar: Jar,
}

impl SessionCookieStore {
    pub(crate) fn new(session: HeaderValue) -> Self {
        Self {
            session,
            jar: Jar::default(),
        }
    }

    fn merge(&self, stored: &HeaderValue) -> Option<HeaderValue> {
        let session = self.session.to_str().ok()?;
        let stored = stored.to_str().ok()?;
        let session_prefix = format!("{SESSION_COOKIE}=");

        let mut pairs = vec![session];
        pairs.extend(
            stored
                .split("; ")
                .filter(|pair| !pair.is_empty() && !pair.starts_with(&session_prefix)),
        );

        let mut combined = HeaderValue::from_str(&pairs.join("; ")).ok()?;
        combined.set_sensitive(true);
        Some(combined)
    }
}

impl CookieStore for SessionCookieStore {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        self.jar.set_cookies(cookie_headers, url);
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        let merged = self
            .jar
            .cookies(url)
            .and_then(|stored| self.merge(&stored));
        Some(merged.unwrap_or_else(|| self.session.clone()))
    }
}
