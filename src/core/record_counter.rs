use crate::domain::model::FileContent;

/// Number of data records in `content`, assuming the first non-blank line is a header.
///
/// Lines are split on `\n`; lines that are empty after trimming are ignored.
/// Never fails: empty input yields 0.
pub fn count_records(content: &str) -> usize {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .count()
        .saturating_sub(1)
}

impl FileContent {
    pub fn record_count(&self) -> usize {
        count_records(self.as_str())
    }
}
