//! Slack dump core: pure rules for naming, normalization and paging.
mod paging;
mod progress;
mod query;
mod token;
mod workspace;

pub use paging::{PageCursor, MAX_RESULT_COUNT};
pub use progress::{render_progress_bar, PROGRESS_BAR_WIDTH};
pub use query::{normalize_query, output_dir_name, IMAGES_FILTER, OUTPUT_DIR_PREFIX};
pub use token::{extract_tokens, select_token, TOKEN_PATTERN};
pub use workspace::{normalize_workspace_url, SLACK_DOMAIN_SUFFIX};
