/// Number of character cells in the bar.
pub const PROGRESS_BAR_WIDTH: usize = 50;

/// `Progress: [ =====>      ] (done / total) files`, without line terminator.
pub fn render_progress_bar(done: usize, total: usize) -> String {
    let filled = if total == 0 {
        PROGRESS_BAR_WIDTH
    } else {
        (done.min(total) * PROGRESS_BAR_WIDTH) / total
    };
    let empty = PROGRESS_BAR_WIDTH - filled;
    format!(
        "Progress: [ {}>{} ] ({done} / {total}) files",
        "=".repeat(filled),
        " ".repeat(empty)
    )
}
