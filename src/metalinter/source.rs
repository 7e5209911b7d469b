//! Line scanner over gometalinter's `config.go`.
//!
//! gometalinter's source changes independently of this tool, so the
//! scanner trades robustness for speed and simplicity: it keys off the
//! exact formatting of the `linterDefinitions` declaration, and the
//! extracted strings are approximate. That is sufficient for the prefix
//! test the classifier performs, and the fragility is accepted on
//! purpose over a full Go parser.

use crate::catalog::GOMETALINTER_PATH;
use crate::gopath;

use super::{Definitions, ExtractError};

/// Line that opens the `linterDefinitions` map literal.
const TABLE_OPENER: &str = "\tlinterDefinitions = map[string]string{";

/// Line that closes it.
const TABLE_CLOSER: &str = "\t}";

/// Extracts definition strings from gometalinter's checked-out source.
pub struct SourceScan;

impl Definitions for SourceScan {
    fn linter_definitions(&self) -> Result<Vec<String>, ExtractError> {
        let path = gopath::src_dir(GOMETALINTER_PATH)
            .map_err(|e| ExtractError::Io(e.to_string()))?
            .join("config.go");

        let source =
            std::fs::read_to_string(&path).map_err(|e| ExtractError::Io(e.to_string()))?;

        scan(&source)
    }
}

#[derive(Debug, PartialEq)]
enum State {
    /// Looking for the map declaration.
    Seeking,
    /// Inside the map literal, consuming one entry per line.
    InTable,
}

/// Run the scanner over the full source text.
fn scan(source: &str) -> Result<Vec<String>, ExtractError> {
    let mut state = State::Seeking;
    let mut defs = Vec::new();

    for line in source.lines() {
        match state {
            State::Seeking => {
                if line.starts_with(TABLE_OPENER) {
                    state = State::InTable;
                }
            }
            State::InTable => {
                if line == TABLE_CLOSER {
                    return Ok(defs);
                }
                defs.push(parse_entry(line)?);
            }
        }
    }

    match state {
        State::Seeking => Err(ExtractError::DefinitionsNotFound),
        State::InTable => Err(ExtractError::UnexpectedEof),
    }
}

/// Extract the definition string from one `"name": <value>,` line.
///
/// Both `"` and a backtick open a Go string, so the third quote token on
/// the line is the one that opens the value (two delimit the key). For a
/// plain literal the definition runs from there to the end of the line
/// minus the closing quote and trailing comma. Raw strings may contain
/// `"` internally, which is why the simple case strips from the end
/// instead of searching for a closing quote.
///
/// One entry builds its value by concatenating a literal with an
/// identifier (the `go vet` definitions). For that shape only the left
/// operand's literal is reported, which still carries the command prefix
/// the classifier tests for.
fn parse_entry(line: &str) -> Result<String, ExtractError> {
    let (open, quote) =
        nth_quote(line, 3).ok_or_else(|| ExtractError::Malformed(line.to_string()))?;

    let bytes = line.as_bytes();
    let ends_with_literal = line.ends_with(',')
        && bytes.len() >= 2
        && matches!(bytes[bytes.len() - 2], b'"' | b'`');

    if ends_with_literal {
        // A third quote inside the two stripped trailing characters
        // means the line has no value content at all.
        if open + 1 > line.len() - 2 {
            return Err(ExtractError::Malformed(line.to_string()));
        }
        return Ok(line[open + 1..line.len() - 2].to_string());
    }

    // Concatenation: take the left operand, closed by the same quote
    // character that opened it.
    let close = line[open + 1..]
        .find(quote)
        .map(|i| open + 1 + i)
        .ok_or_else(|| ExtractError::Malformed(line.to_string()))?;

    Ok(line[open + 1..close].to_string())
}

/// Byte offset and character of the nth quote token (`"` or backtick)
/// on the line, 1-based.
fn nth_quote(line: &str, n: usize) -> Option<(usize, char)> {
    line.char_indices()
        .filter(|&(_, c)| c == '"' || c == '`')
        .nth(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_double_quoted_entry() {
        let def = parse_entry("\t\t\"deadcode\": \"deadcode {path}\",").unwrap();
        assert_eq!(def, "deadcode {path}");
    }

    #[test]
    fn extracts_raw_string_entry() {
        let def =
            parse_entry("\t\t\"errcheck\": `errcheck -abspath {path}:PATH:LINE:COL`,").unwrap();
        assert_eq!(def, "errcheck -abspath {path}:PATH:LINE:COL");
    }

    #[test]
    fn raw_string_may_contain_double_quotes() {
        let def = parse_entry("\t\t\"lll\": `lll --maxlength \"120\" {path}`,").unwrap();
        assert_eq!(def, "lll --maxlength \"120\" {path}");
    }

    #[test]
    fn concatenated_value_reports_left_operand_only() {
        let def =
            parse_entry("\t\t\"vet\": \"go tool vet {path}:\" + vetPattern,").unwrap();
        assert_eq!(def, "go tool vet {path}:");
    }

    #[test]
    fn fewer_than_three_quotes_is_malformed() {
        let err = parse_entry("\t\t\"deadcode\": deadcode,").unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }

    #[test]
    fn missing_declaration_fails() {
        let src = "package main\n\nvar other = 1\n";
        assert_eq!(scan(src), Err(ExtractError::DefinitionsNotFound));
    }

    #[test]
    fn unterminated_table_fails() {
        let src = "\tlinterDefinitions = map[string]string{\n\t\t\"vet\": \"go vet\",\n";
        assert_eq!(scan(src), Err(ExtractError::UnexpectedEof));
    }

    #[test]
    fn malformed_entry_aborts_scan() {
        let src = "\tlinterDefinitions = map[string]string{\n\t\tnot an entry\n\t}\n";
        assert!(matches!(scan(src), Err(ExtractError::Malformed(_))));
    }

    #[test]
    fn collects_entries_in_file_order() {
        let src = concat!(
            "package main\n",
            "\n",
            "var (\n",
            "\tlinterDefinitions = map[string]string{\n",
            "\t\t\"aligncheck\": \"aligncheck {path}\",\n",
            "\t\t\"deadcode\":   `deadcode {path}`,\n",
            "\t\t\"vet\":        \"go tool vet {path}:\" + vetPattern,\n",
            "\t}\n",
            ")\n",
        );

        let defs = scan(src).unwrap();
        assert_eq!(
            defs,
            vec!["aligncheck {path}", "deadcode {path}", "go tool vet {path}:"]
        );
    }

    #[test]
    fn lines_after_closer_are_ignored() {
        let src = concat!(
            "\tlinterDefinitions = map[string]string{\n",
            "\t\t\"dupl\": \"dupl -plumbing {path}\",\n",
            "\t}\n",
            "\tsomethingElse = 1\n",
        );

        assert_eq!(scan(src).unwrap(), vec!["dupl -plumbing {path}"]);
    }
}
