/// Domain appended to bare workspace names.
pub const SLACK_DOMAIN_SUFFIX: &str = ".slack.com";

const SECURE_SCHEME: &str = "https://";

/// Turns `myteam` into `https://myteam.slack.com`.
///
/// Purely textual: existing `https://` prefixes and `.slack.com` suffixes are
/// kept, nothing is resolved or validated.
pub fn normalize_workspace_url(input: &str) -> String {
    let mut url = input.to_string();
    if !url.starts_with(SECURE_SCHEME) {
        url.insert_str(0, SECURE_SCHEME);
    }
    if !url.ends_with(SLACK_DOMAIN_SUFFIX) {
        url.push_str(SLACK_DOMAIN_SUFFIX);
    }
    url
}
