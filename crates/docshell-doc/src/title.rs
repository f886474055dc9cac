//! Document title extraction.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Level-0 section title: `= Title`, or the Markdown-style `# Title`.
static TITLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[=#]\s+(\S.*)$").expect("valid title regex"));

/// Section title of any level, `= Title` through `====== Title`.
static SECTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:={1,6}|#{1,6})\s+(\S.*)$").expect("valid section regex")
});

/// `:title: Value` or `:doctitle: Value` attribute entry.
static TITLE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:(title|doctitle):\s*(.*)$").expect("valid title entry regex"));

/// Any attribute entry, e.g. `:toc:` or `:!sectids:`.
static ATTRIBUTE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:!?[\w-]+!?:").expect("valid attribute regex"));

/// Opening delimiter of a comment, listing or literal block. The block runs
/// until a line identical to the delimiter.
static VERBATIM_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:/{4,}|-{4,}|\.{4,})$").expect("valid delimiter regex")
});

/// Errors that can occur when reading a document title.
#[derive(Debug, thiserror::Error)]
pub enum TitleError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Document has no title (expected a `= Title` line or a section heading)")]
    Missing,
}

/// Read a source document and extract its declared title.
pub fn read_title(path: impl AsRef<Path>) -> Result<String, TitleError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| TitleError::Read {
        path: path.display().to_string(),
        source,
    })?;

    extract_title(&source)
}

/// Extract the document title from AsciiDoc source.
///
/// In order of precedence: a `:title:` attribute in the header, a
/// `:doctitle:` attribute in the header, the level-0 heading opening the
/// document, and finally the first section heading of any level. The
/// result has `&`, `<` and `>` replaced by HTML entities.
pub fn extract_title(source: &str) -> Result<String, TitleError> {
    let mut title_attr: Option<String> = None;
    let mut doctitle_attr: Option<String> = None;
    let mut heading: Option<String> = None;
    let mut first_section: Option<String> = None;

    let mut in_header = true;
    let mut open_block: Option<&str> = None;

    for line in source.lines() {
        let line = line.trim_end();

        if let Some(delimiter) = open_block {
            if line == delimiter {
                open_block = None;
            }
            continue;
        }
        if VERBATIM_DELIMITER.is_match(line) {
            open_block = Some(line);
            continue;
        }
        if is_line_comment(line) {
            continue;
        }

        if in_header {
            if line.is_empty() {
                // The header ends at the first blank line after the title.
                if heading.is_some() {
                    in_header = false;
                }
                continue;
            }

            if let Some(caps) = TITLE_ENTRY.captures(line) {
                let value = caps[2].trim().to_string();
                match &caps[1] {
                    "title" => title_attr = Some(value),
                    _ => doctitle_attr = Some(value),
                }
                continue;
            }
            if ATTRIBUTE_ENTRY.is_match(line) {
                continue;
            }

            if heading.is_none() {
                if let Some(caps) = TITLE_LINE.captures(line) {
                    heading = Some(caps[1].trim().to_string());
                    continue;
                }
                // Body content before any title: the document has no header title.
                in_header = false;
            } else {
                // Author and revision lines follow the title; nothing to collect.
                continue;
            }
        }

        if let Some(caps) = SECTION_LINE.captures(line) {
            first_section = Some(caps[1].trim().to_string());
            break;
        }
    }

    [title_attr, doctitle_attr, heading, first_section]
        .into_iter()
        .flatten()
        .find(|t| !t.is_empty())
        .map(|t| escape_specialchars(&t))
        .ok_or(TitleError::Missing)
}

fn is_line_comment(line: &str) -> bool {
    line.starts_with("//") && !line.starts_with("///")
}

/// Replace `&`, `<` and `>` with their HTML entities.
fn escape_specialchars(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_level_zero_heading() {
        let source = "= Getting Started\n\nSome text.\n";

        assert_eq!(extract_title(source).unwrap(), "Getting Started");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let source = r#"
// generated from the wiki
////
= Not this one
////

= Macros
Author Name
:toc:

== Section
"#;

        assert_eq!(extract_title(source).unwrap(), "Macros");
    }

    #[test]
    fn longer_comment_delimiters_close_on_same_length() {
        let source = "//////\n= Hidden\n////\n= Still Hidden\n//////\n= Visible\n";

        assert_eq!(extract_title(source).unwrap(), "Visible");
    }

    #[test]
    fn accepts_attribute_entries_before_title() {
        let source = ":source-highlighter: rouge\n:!sectids:\n= Records\n";

        assert_eq!(extract_title(source).unwrap(), "Records");
    }

    #[test]
    fn doctitle_attribute_overrides_heading() {
        let source = "= Short\n:doctitle: A Much Longer Title\n\nBody\n";

        assert_eq!(extract_title(source).unwrap(), "A Much Longer Title");
    }

    #[test]
    fn title_attribute_takes_precedence() {
        assert_eq!(
            extract_title(":title: Override\n= Heading\n").unwrap(),
            "Override"
        );
        assert_eq!(
            extract_title("= Heading\n:doctitle: Doc\n:title: Override\n").unwrap(),
            "Override"
        );
    }

    #[test]
    fn doctitle_after_header_is_ignored() {
        let source = "= Short\n\n:doctitle: Too Late\n";

        assert_eq!(extract_title(source).unwrap(), "Short");
    }

    #[test]
    fn accepts_markdown_style_heading() {
        assert_eq!(extract_title("# Ports\n").unwrap(), "Ports");
    }

    #[test]
    fn trims_trailing_whitespace() {
        assert_eq!(extract_title("=   Spaced Out   \n").unwrap(), "Spaced Out");
    }

    #[test]
    fn falls_back_to_first_section_heading() {
        let source = "== Introduction\n\nText.\n\n== Usage\n";

        assert_eq!(extract_title(source).unwrap(), "Introduction");
    }

    #[test]
    fn section_heading_after_body_text() {
        let source = ":toc:\nJust a paragraph.\n\n=== Details\n";

        assert_eq!(extract_title(source).unwrap(), "Details");
    }

    #[test]
    fn headings_inside_listing_blocks_are_ignored() {
        let source = "Intro text.\n\n----\n== Not A Heading\n----\n\n== Real\n";

        assert_eq!(extract_title(source).unwrap(), "Real");
    }

    #[test]
    fn escapes_special_characters() {
        assert_eq!(
            extract_title("= Ports & <Files>\n").unwrap(),
            "Ports &amp; &lt;Files&gt;"
        );
        assert_eq!(extract_title(":title: A > B\n").unwrap(), "A &gt; B");
    }

    #[test]
    fn errors_without_any_heading() {
        let result = extract_title("Just a paragraph.\n\n====\nexample\n====\n");

        assert!(matches!(result, Err(TitleError::Missing)));
    }

    #[test]
    fn errors_on_empty_document() {
        assert!(matches!(extract_title(""), Err(TitleError::Missing)));
    }

    #[test]
    fn reads_title_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("lists.adoc");
        std::fs::write(&path, "= Lists\n").unwrap();

        assert_eq!(read_title(&path).unwrap(), "Lists");
    }

    #[test]
    fn read_error_names_the_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.adoc");

        let err = read_title(&path).unwrap_err();

        assert!(err.to_string().contains("missing.adoc"));
    }
}
