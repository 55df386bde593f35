//! Context document parsing
//!
//! Resolves the default search scope from the workspace's context document
//! (`.copilot-context.md`): a `modules:` section listing the directories a
//! search should cover when no explicit paths are given.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Name of the context document at the workspace root
pub const CONTEXT_FILE: &str = ".copilot-context.md";

/// Parser position relative to the `modules:` section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Before (or after) the module list
    Idle,
    /// Inside the list, consuming `- <path>` items
    Collecting,
}

/// What a single line means to the module-list parser
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind {
    /// The `modules:` header
    SectionStart,
    /// A `- <path>` list item, carrying its trimmed payload
    ListItem(String),
    /// An unindented non-empty line, which closes an open list
    SectionEnd,
    /// Blank lines, indented prose, anything else
    Other,
}

fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.starts_with("modules:") {
        return LineKind::SectionStart;
    }
    if trimmed.starts_with('-') {
        let item = trimmed.trim_start_matches('-').trim();
        return LineKind::ListItem(item.to_string());
    }
    if !trimmed.is_empty() && !line.starts_with(' ') && !line.starts_with('\t') {
        return LineKind::SectionEnd;
    }
    LineKind::Other
}

/// Extract the ordered `modules:` list from document content
///
/// Single pass: list items only count while the `modules:` section is open,
/// and the first unindented non-list line closes it. Items with nothing
/// after the dash are skipped.
pub fn parse_modules(content: &str) -> Vec<String> {
    let mut modules = Vec::new();
    let mut section = Section::Idle;

    for line in content.lines() {
        match (section, classify(line)) {
            (_, LineKind::SectionStart) => section = Section::Collecting,
            (Section::Collecting, LineKind::ListItem(item)) => {
                if !item.is_empty() {
                    modules.push(item);
                }
            }
            (Section::Collecting, LineKind::SectionEnd) => section = Section::Idle,
            _ => {}
        }
    }

    modules
}

/// Read the module list from a context document on disk
///
/// A missing document is not an error: discovery yields an empty list and
/// the caller decides whether that is fatal.
pub fn load_modules(context_file: &Path) -> Result<Vec<String>> {
    if !context_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(context_file)
        .with_context(|| format!("Failed to read context file: {}", context_file.display()))?;
    Ok(parse_modules(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let content = "modules:\n  - a/b\n  - c/d\n\nUnrelated prose here.\n";
        assert_eq!(parse_modules(content), vec!["a/b", "c/d"]);
    }

    #[test]
    fn test_parse_no_section() {
        let content = "Just some notes.\n- a stray list item\n";
        assert!(parse_modules(content).is_empty());
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_modules("").is_empty());
    }

    #[test]
    fn test_parse_stops_at_unindented_line() {
        let content = "modules:\n  - a/b\nservices:\n  - c/d\n";
        assert_eq!(parse_modules(content), vec!["a/b"]);
    }

    #[test]
    fn test_parse_indented_prose_keeps_section_open() {
        let content = "modules:\n  - a/b\n  covered by the claims team\n  - c/d\n";
        assert_eq!(parse_modules(content), vec!["a/b", "c/d"]);
    }

    #[test]
    fn test_parse_blank_lines_keep_section_open() {
        let content = "modules:\n  - a/b\n\n  - c/d\n";
        assert_eq!(parse_modules(content), vec!["a/b", "c/d"]);
    }

    #[test]
    fn test_parse_skips_empty_items() {
        let content = "modules:\n  -\n  - a/b\n";
        assert_eq!(parse_modules(content), vec!["a/b"]);
    }

    #[test]
    fn test_parse_strips_all_leading_dashes() {
        let content = "modules:\n  -- a/b\n";
        assert_eq!(parse_modules(content), vec!["a/b"]);
    }

    #[test]
    fn test_parse_unindented_items_collected() {
        let content = "modules:\n- a/b\n- c/d\n";
        assert_eq!(parse_modules(content), vec!["a/b", "c/d"]);
    }

    #[test]
    fn test_parse_items_before_section_ignored() {
        let content = "- x/y\nmodules:\n  - a/b\n";
        assert_eq!(parse_modules(content), vec!["a/b"]);
    }

    #[test]
    fn test_parse_second_header_reopens_section() {
        let content = "modules:\n  - a/b\nend.\nmodules:\n  - c/d\n";
        assert_eq!(parse_modules(content), vec!["a/b", "c/d"]);
    }

    #[test]
    fn test_load_modules_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let modules = load_modules(&temp.path().join(CONTEXT_FILE)).unwrap();
        assert!(modules.is_empty());
    }

    #[test]
    fn test_load_modules_from_disk() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(CONTEXT_FILE);
        std::fs::write(&path, "# Workspace\n\nmodules:\n  - patches/claims\n").unwrap();
        assert_eq!(load_modules(&path).unwrap(), vec!["patches/claims"]);
    }
}
