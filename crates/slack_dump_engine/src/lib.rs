//! Slack dump engine: authenticated session, search pagination and downloads.
mod cookies;
mod dump;
mod persist;
mod search;
mod session;
mod types;

pub use dump::{run_dump, DumpJob};
pub use persist::{create_output_dir, MatchWriter, IMAGE_EXTENSION};
pub use search::search_url;
pub use session::{SessionSettings, WorkspaceSession, DEFAULT_API_BASE, SESSION_COOKIE};
pub use types::{
    DumpError, DumpEvent, DumpSummary, FileResults, Paging, ProgressSink, SearchMatch,
    SearchResponse,
};
