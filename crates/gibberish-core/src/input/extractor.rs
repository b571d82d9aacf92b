//! Name extraction from comma-separated text.

use super::InputError;

/// Split raw text into candidate names.
///
/// Rows are separated by `\n`, `\r\n` or `\r` and fields by commas, with
/// standard CSV quoting (a quoted field may contain commas, newlines and
/// doubled quotes). Fields from every row are concatenated in row-major
/// order. Fields are not trimmed and empty fields are kept. A blank line is a
/// row holding one empty field; a single trailing line break ends the last
/// row without adding one.
pub fn extract_names(text: &str) -> Result<Vec<String>, InputError> {
    let mut names = Vec::new();

    for row in split_rows(text) {
        if row.is_empty() {
            names.push(String::new());
            continue;
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::None)
            .from_reader(row.as_bytes());

        for record in reader.records() {
            let record = record?;
            names.extend(record.iter().map(str::to_string));
        }
    }

    tracing::debug!(count = names.len(), "Extracted candidate names");
    Ok(names)
}

/// Cut `text` at row terminators that sit outside quoted fields.
///
/// A quote only opens a quoted field at the start of a field; inside one, a
/// doubled quote is an escaped quote.
fn split_rows(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut rows = Vec::new();
    let mut start = 0;
    let mut at_field_start = true;
    let mut quoted = false;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        if quoted {
            if byte == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 2;
                    continue;
                }
                quoted = false;
            }
            i += 1;
            continue;
        }

        match byte {
            b'"' if at_field_start => {
                quoted = true;
                at_field_start = false;
            }
            b',' => at_field_start = true,
            b'\n' | b'\r' => {
                rows.push(&text[start..i]);
                if byte == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
                at_field_start = true;
            }
            _ => at_field_start = false,
        }
        i += 1;
    }

    if start < bytes.len() {
        rows.push(&text[start..]);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_row() {
        let names = extract_names("alice,bob123,xk7qz").unwrap();
        assert_eq!(names, vec!["alice", "bob123", "xk7qz"]);
    }

    #[test]
    fn test_rows_are_flattened_in_order() {
        let names = extract_names("alice,bob\ncarol\r\ndave,erin,frank\n").unwrap();
        assert_eq!(names, vec!["alice", "bob", "carol", "dave", "erin", "frank"]);
    }

    #[test]
    fn test_empty_fields_are_preserved() {
        let names = extract_names("alice,,bob,").unwrap();
        assert_eq!(names, vec!["alice", "", "bob", ""]);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let names = extract_names("alice, bob ").unwrap();
        assert_eq!(names, vec!["alice", " bob "]);
    }

    #[test]
    fn test_quoted_fields() {
        let names = extract_names("\"Smith, John\",alice\n\"multi\nline\",\"say \"\"hi\"\"\"").unwrap();
        assert_eq!(names, vec!["Smith, John", "alice", "multi\nline", "say \"hi\""]);
    }

    #[test]
    fn test_blank_lines_become_empty_names() {
        assert_eq!(extract_names("alice\n\nbob").unwrap(), vec!["alice", "", "bob"]);
        assert_eq!(
            extract_names("alice,\n\nbob\n").unwrap(),
            vec!["alice", "", "", "bob"]
        );
        assert_eq!(extract_names("alice\r\n\r\nbob").unwrap(), vec!["alice", "", "bob"]);
    }

    #[test]
    fn test_only_one_trailing_line_break_is_dropped() {
        assert_eq!(extract_names("alice\n").unwrap(), vec!["alice"]);
        assert_eq!(extract_names("alice\n\n").unwrap(), vec!["alice", ""]);
        assert_eq!(extract_names("\n").unwrap(), vec![""]);
    }

    #[test]
    fn test_line_breaks_inside_quotes_do_not_split_rows() {
        let names = extract_names("\"a\n\nb\",c\n\nd").unwrap();
        assert_eq!(names, vec!["a\n\nb", "c", "", "d"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_names("").unwrap().is_empty());
    }

    #[test]
    fn test_stray_quote_in_unquoted_field_is_kept() {
        let names = extract_names("o\"brien,alice").unwrap();
        assert_eq!(names, vec!["o\"brien", "alice"]);
    }

    proptest! {
        #[test]
        fn unquoted_row_round_trips(fields in prop::collection::vec("[a-zA-Z0-9 ._-]{1,12}", 1..8)) {
            let text = fields.join(",");
            let names = extract_names(&text).unwrap();
            prop_assert_eq!(names.join(","), text);
            prop_assert_eq!(names, fields);
        }

        #[test]
        fn unquoted_rows_round_trip(
            rows in prop::collection::vec(prop::collection::vec("[a-z0-9]{1,8}", 1..5), 1..5)
        ) {
            let text = rows
                .iter()
                .map(|row| row.join(","))
                .collect::<Vec<_>>()
                .join("\n");
            let names = extract_names(&text).unwrap();
            let expected: Vec<String> = rows.into_iter().flatten().collect();
            prop_assert_eq!(names, expected);
        }
    }
}
