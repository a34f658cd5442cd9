use pretty_assertions::assert_eq;
use slack_dump_core::{render_progress_bar, PROGRESS_BAR_WIDTH};

fn bar_cells(line: &str) -> &str {
    let start = line.find("[ ").unwrap() + 2;
    let end = line.find(" ]").unwrap();
    &line[start..end]
}

#[test]
fn empty_bar_at_start() {
    let line = render_progress_bar(0, 4);
    assert_eq!(
        line,
        format!("Progress: [ >{} ] (0 / 4) files", " ".repeat(PROGRESS_BAR_WIDTH))
    );
}

#[test]
fn half_way_fills_half_the_cells() {
    let line = render_progress_bar(2, 4);
    let cells = bar_cells(&line);
    assert_eq!(cells.matches('=').count(), 25);
    assert!(line.ends_with("(2 / 4) files"));
}

#[test]
fn bar_width_is_constant() {
    for done in 0..=7 {
        let line = render_progress_bar(done, 7);
        assert_eq!(bar_cells(&line).chars().count(), PROGRESS_BAR_WIDTH + 1);
    }
}

#[test]
fn complete_and_empty_totals_render_full() {
    let full = format!("{}>", "=".repeat(PROGRESS_BAR_WIDTH));
    assert_eq!(bar_cells(&render_progress_bar(3, 3)), full);
    assert_eq!(bar_cells(&render_progress_bar(0, 0)), full);
}
