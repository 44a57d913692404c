//! Line parser for raw blocklist feed bodies.
//!
//! Feed files are heterogeneous plain text: comment headers, blank lines,
//! and one address per non-comment line. The parser applies a single cheap
//! filter to every line and silently drops whatever fails it.

use serde::{Deserialize, Serialize};

/// One blocklisted address and the source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Literal address text as it appeared in the feed.
    pub address: String,

    /// Identifier of the producing feed, or the client-supplied name for
    /// records created through the API.
    pub name: String,
}

/// Accept a line as an address candidate iff its second character (index
/// 1) is an ASCII digit or a dot.
///
/// Feed files open comment lines with `#`, and every dotted-quad form has
/// a digit or dot in the second position, so this separates the two
/// without parsing. The filter is kept compatible with the historical
/// datasets, blind spots included: `#1...` comments pass, and
/// one-character lines never do.
fn is_candidate(line: &str) -> bool {
    matches!(line.chars().nth(1), Some(c) if c == '.' || c.is_ascii_digit())
}

/// Parse a single feed line into a record, if it looks like an address.
pub fn parse_line(line: &str, source: &str) -> Option<AddressRecord> {
    if is_candidate(line) {
        Some(AddressRecord {
            address: line.to_string(),
            name: source.to_string(),
        })
    } else {
        None
    }
}

/// Lazily parse a whole feed body, dropping non-address lines.
///
/// Splits on `\n` and `\r\n`. An empty or whitespace-only body yields no
/// records; that is not an error.
pub fn records<'a>(
    body: &'a str,
    source: &'a str,
) -> impl Iterator<Item = AddressRecord> + 'a {
    body.lines().filter_map(move |line| parse_line(line, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_dotted_quads() {
        assert!(parse_line("1.2.3.4", "feed").is_some());
        assert!(parse_line("12.3.4.5", "feed").is_some());
        assert!(parse_line("192.168.0.1", "feed").is_some());
        assert!(parse_line("9.9.9.9", "feed").is_some());
    }

    #[test]
    fn test_rejects_comments_and_blanks() {
        assert!(parse_line("# comment line", "feed").is_none());
        assert!(parse_line("; other comment", "feed").is_none());
        assert!(parse_line("", "feed").is_none());
        assert!(parse_line("   ", "feed").is_none());
    }

    #[test]
    fn test_record_carries_source_and_literal_line() {
        let record = parse_line("5.6.7.8", "blocklist_de.ipset").unwrap();
        assert_eq!(record.address, "5.6.7.8");
        assert_eq!(record.name, "blocklist_de.ipset");
    }

    // Known blind spot, preserved for dataset compatibility: a comment
    // whose second character is a digit passes the filter.
    #[test]
    fn test_false_positive_numeric_comment() {
        assert!(parse_line("#1 header", "feed").is_some());
    }

    // Known blind spot: one-character lines and lines with two or more
    // leading spaces are rejected even when they hold a valid address.
    #[test]
    fn test_false_negative_short_and_indented_lines() {
        assert!(parse_line("1", "feed").is_none());
        assert!(parse_line("  1.2.3.4", "feed").is_none());
    }

    #[test]
    fn test_records_lazy_over_mixed_body() {
        let body = "# header\n1.2.3.4\n\nnot an address\n5.6.7.8";
        let parsed: Vec<AddressRecord> = records(body, "feed").collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].address, "1.2.3.4");
        assert_eq!(parsed[1].address, "5.6.7.8");
    }

    #[test]
    fn test_records_handles_crlf() {
        let body = "1.2.3.4\r\n# skip\r\n5.6.7.8\r\n";
        let parsed: Vec<AddressRecord> = records(body, "feed").collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].address, "1.2.3.4");
        assert_eq!(parsed[1].address, "5.6.7.8");
    }

    #[test]
    fn test_empty_body_yields_nothing() {
        assert_eq!(records("", "feed").count(), 0);
        assert_eq!(records("\n\n\n", "feed").count(), 0);
    }

    // The filter is positional over characters, not bytes: a multi-byte
    // first character still leaves a digit in second position.
    #[test]
    fn test_multibyte_first_character() {
        assert!(parse_line("é1.2.3.4", "feed").is_some());
        assert!(parse_line("éa.2.3.4", "feed").is_none());
    }
}
