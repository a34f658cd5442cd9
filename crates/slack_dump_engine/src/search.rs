use dump_logging::{dump_debug, dump_info};
use slack_dump_core::{PageCursor, MAX_RESULT_COUNT};
use url::Url;

use crate::session::WorkspaceSession;
use crate::{DumpError, DumpEvent, FileResults, ProgressSink, SearchMatch, SearchResponse};

const SEARCH_FILES_PATH: &str = "/api/search.files";

/// `search.files` URL for one page of `query`.
pub fn search_url(api_base: &str, query: &str, page: u32) -> Result<Url, DumpError> {
    let base = format!("{}{SEARCH_FILES_PATH}", api_base.trim_end_matches('/'));
    let count = MAX_RESULT_COUNT.to_string();
    let page = page.to_string();
    Url::parse_with_params(
        &base,
        &[
            ("query", query),
            ("count", count.as_str()),
            ("page", page.as_str()),
        ],
    )
    .map_err(|err| DumpError::InvalidUrl {
        url: base.clone(),
        message: err.to_string(),
    })
}

/// Requests every result page of `query` and returns all matches in order.
///
/// `query` is sent as given; the images filter is applied by the caller.
pub(crate) async fn collect_matches(
    session: &WorkspaceSession,
    query: &str,
    sink: &dyn ProgressSink,
) -> Result<Vec<SearchMatch>, DumpError> {
    let mut matches = Vec::new();
    let mut cursor = PageCursor::new();

    while let Some(page) = cursor.next_page() {
        let url = search_url(session.api_base(), query, page)?;
        dump_debug!("Requesting search page {}", page);
        let files = fetch_page(session, url.as_str()).await?;

        let found = files.matches.len();
        dump_info!(
            "Search page {} of {} returned {} files",
            files.paging.page,
            files.paging.pages,
            found
        );
        sink.emit(DumpEvent::SearchPage {
            page: files.paging.page,
            pages: files.paging.pages,
            matches: found,
        });
        cursor.advance(files.paging.page, files.paging.pages);
        matches.extend(files.matches);
    }

    Ok(matches)
}

async fn fetch_page(session: &WorkspaceSession, url: &str) -> Result<FileResults, DumpError> {
    let (_status, body) = session.get_bytes(url).await?;
    parse_search_response(&body)
}

fn parse_search_response(body: &[u8]) -> Result<FileResults, DumpError> {
    let raw = || String::from_utf8_lossy(body).into_owned();
    let response: SearchResponse = serde_json::from_slice(body).map_err(|err| DumpError::Decode {
        message: format!("{err} in {}", raw()),
    })?;
    if !response.ok {
        return Err(DumpError::Api { raw: raw() });
    }
    response.files.ok_or_else(|| DumpError::Decode {
        message: format!("missing files section in {}", raw()),
    })
}
