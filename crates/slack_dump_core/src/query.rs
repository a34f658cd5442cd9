/// Search modifier restricting results to images.
pub const IMAGES_FILTER: &str = "type:images";

/// Prefix of every output directory name.
pub const OUTPUT_DIR_PREFIX: &str = "slack-image-dump-";

/// Appends ` type:images` unless the filter already occurs in the query.
///
/// The check is a plain substring test, so `nontype:imagesonly` counts as
/// already filtered.
pub fn normalize_query(query: &str) -> String {
    if query.contains(IMAGES_FILTER) {
        query.to_string()
    } else {
        format!("{query} {IMAGES_FILTER}")
    }
}

/// Directory name for a dump of `query`: spaces become hyphens, quotes are dropped.
pub fn output_dir_name(query: &str) -> String {
    let sanitized: String = query
        .chars()
        .filter(|c| !matches!(c, '"' | '\''))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect();
    format!("{OUTPUT_DIR_PREFIX}{sanitized}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_are_removed_before_hyphenation() {
        assert_eq!(
            output_dir_name(r#"from:@bob "red car" it's"#),
            "slack-image-dump-from:@bob-red-car-its"
        );
    }

    #[test]
    fn empty_query_still_gets_prefix() {
        assert_eq!(output_dir_name(""), OUTPUT_DIR_PREFIX);
        assert_eq!(normalize_query(""), " type:images");
    }
}
