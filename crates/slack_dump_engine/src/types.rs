use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// One file record from `search.files`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchMatch {
    pub id: String,
    pub url_private_download: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default)]
    pub filetype: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Paging {
    pub page: u32,
    pub pages: u32,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileResults {
    #[serde(default)]
    pub matches: Vec<SearchMatch>,
    pub paging: Paging,
}

/// Top level of a `search.files` response.
///
/// `files` is only present when `ok` is true; `error` only when it is false.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub files: Option<FileResults>,
}

/// Result of a completed dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpSummary {
    pub output_dir: PathBuf,
    pub files_written: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpEvent {
    SearchPage {
        page: u32,
        pages: u32,
        matches: usize,
    },
    Downloading {
        index: usize,
        total: usize,
    },
    Saved {
        index: usize,
        path: PathBuf,
        bytes: u64,
    },
    Finished {
        total: usize,
    },
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: DumpEvent);
}

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error(
        "No Slack tokens found. Ensure that the supplied cookie is valid for the specified \
         workspace ({workspace_url}). If this is an enterprise Slack account, you might need to \
         supply the workspace url as workspacename.enterprise.slack.com."
    )]
    MissingToken { workspace_url: String },
    #[error("search request failed: {raw}")]
    Api { raw: String },
    #[error("output directory {} already exists", .0.display())]
    OutputDirExists(PathBuf),
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),
    #[error("invalid url {url}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("could not decode search response: {message}")]
    Decode { message: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
