use crate::utils::error::Result;
use csv::{ReaderBuilder, Trim};

/// Column names from the first non-blank line of `content`.
pub fn read_header_columns(content: &str) -> Result<Vec<String>> {
    let header_line = match content.split('\n').map(str::trim).find(|line| !line.is_empty()) {
        Some(line) => line,
        None => return Ok(Vec::new()),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(header_line.as_bytes());

    match reader.records().next() {
        Some(record) => Ok(record?.iter().map(str::to_string).collect()),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_header() {
        let columns = read_header_columns("order_id, product_type ,quantity\n1,Electronics,2\n").unwrap();
        assert_eq!(columns, vec!["order_id", "product_type", "quantity"]);
    }

    #[test]
    fn test_quoted_header_fields() {
        let columns = read_header_columns("\"name, full\",age\r\n").unwrap();
        assert_eq!(columns, vec!["name, full", "age"]);
    }

    #[test]
    fn test_leading_blank_lines_are_skipped() {
        let columns = read_header_columns("\n  \nid,total\n").unwrap();
        assert_eq!(columns, vec!["id", "total"]);
    }

    #[test]
    fn test_empty_content_has_no_columns() {
        assert!(read_header_columns("").unwrap().is_empty());
    }
}
