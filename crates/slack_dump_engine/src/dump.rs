use std::path::{Path, PathBuf};

use dump_logging::{dump_debug, dump_info, dump_warn};
use slack_dump_core::{normalize_query, output_dir_name};

use crate::persist::{create_output_dir, MatchWriter};
use crate::search::collect_matches;
use crate::session::WorkspaceSession;
use crate::{DumpError, DumpEvent, DumpSummary, ProgressSink, SearchMatch};

/// One run of the dumper: where files go, what was asked, what was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpJob {
    output_dir: PathBuf,
    query: String,
    matches: Vec<SearchMatch>,
}

impl DumpJob {
    /// Job for `query` with its output directory placed under `root`.
    pub fn new(root: &Path, query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            output_dir: root.join(output_dir_name(&query)),
            query,
            matches: Vec::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The query as sent to the search endpoint.
    pub fn search_query(&self) -> String {
        normalize_query(&self.query)
    }

    pub fn matches(&self) -> &[SearchMatch] {
        &self.matches
    }

    /// Pages through the search results and appends every match.
    pub async fn collect(
        &mut self,
        session: &WorkspaceSession,
        sink: &dyn ProgressSink,
    ) -> Result<(), DumpError> {
        let search_query = self.search_query();
        dump_info!("Searching for {:?}", search_query);
        let found = collect_matches(session, &search_query, sink).await?;
        self.matches.extend(found);
        dump_info!("Collected {} matches", self.matches.len());
        Ok(())
    }

    /// Downloads every collected match, in order, into the output directory.
    ///
    /// Returns the number of files written. Files already written stay on disk
    /// when a later download fails.
    pub async fn download(
        &self,
        session: &WorkspaceSession,
        sink: &dyn ProgressSink,
    ) -> Result<usize, DumpError> {
        let writer = MatchWriter::new(self.output_dir.clone());
        let total = self.matches.len();

        for (index, file) in self.matches.iter().enumerate() {
            sink.emit(DumpEvent::Downloading { index, total });
            dump_debug!("Downloading {} from {}", file.id, file.url_private_download);

            let (status, body) = session.get_bytes(&file.url_private_download).await?;
            if !status.is_success() {
                dump_warn!(
                    "Download of {} answered {}; saving the body anyway",
                    file.id,
                    status
                );
            }

            let path = writer.write(index, &body)?;
            sink.emit(DumpEvent::Saved {
                index,
                path,
                bytes: body.len() as u64,
            });
        }

        sink.emit(DumpEvent::Finished { total });
        Ok(total)
    }
}

/// Searches for `query` and saves every matching file under
/// `root/slack-image-dump-<query>`.
///
/// The output directory must not exist yet; when it does, nothing is requested.
pub async fn run_dump(
    session: &WorkspaceSession,
    root: &Path,
    query: &str,
    sink: &dyn ProgressSink,
) -> Result<DumpSummary, DumpError> {
    let mut job = DumpJob::new(root, query);
    create_output_dir(job.output_dir())?;
    dump_info!("Created output directory {:?}", job.output_dir());

    job.collect(session, sink).await?;
    let files_written = job.download(session, sink).await?;

    Ok(DumpSummary {
        output_dir: job.output_dir,
        files_written,
    })
}
