//! Anchored recognition of an existing header block.
//!
//! A header block looks like
//!
//! ```text
//! /*
//!   ==========================
//!     anything, any number of lines
//!   ==========================
//! */
//! ```
//!
//! and must start at offset 0. The scan runs in two phases: find the opening
//! divider, then walk forward to the first divider line at least as long as
//! the opening one that is followed by the closing marker. Divider-looking
//! lines further down the file never extend the match.

const OPEN: &str = "/*";
const CLOSE: &str = "*/";

/// Shortest run of delimiter characters that counts as a divider line.
pub const MIN_DIVIDER_RUN: usize = 10;

pub const DEFAULT_DELIMITER: char = '=';

/// A recognized header at the start of some content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBlock {
    /// Byte offset just past the closing `*/`.
    pub end: usize,
    /// Number of delimiter characters on the opening divider.
    pub divider_run: usize,
}

impl HeaderBlock {
    /// Everything after the block, untouched.
    pub fn tail<'a>(&self, content: &'a str) -> &'a str {
        &content[self.end..]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatcher {
    delimiter: char,
    min_run: usize,
}

impl HeaderMatcher {
    pub fn new(delimiter: char, min_run: usize) -> Self {
        Self {
            delimiter,
            min_run: min_run.max(1),
        }
    }

    pub fn is_match(&self, content: &str) -> bool {
        self.find(content).is_some()
    }

    /// Locate a header block anchored at the start of `content`.
    pub fn find(&self, content: &str) -> Option<HeaderBlock> {
        if !content.starts_with(OPEN) {
            return None;
        }
        let mut lines = line_spans(content, OPEN.len());

        // Rest of the `/*` line, then optional blank lines, then the opening divider.
        let (_, opener) = lines.next()?;
        if !is_blank_line(opener) {
            return None;
        }
        let opening_run = loop {
            let (_, line) = lines.next()?;
            if is_blank_line(line) {
                continue;
            }
            break self.divider_run(line)?;
        };

        // At least one content line separates the dividers.
        lines.next()?;

        for (start, line) in lines {
            let Some(run) = self.divider_run(line) else {
                continue;
            };
            if run < opening_run {
                continue;
            }
            let after = start + line.len();
            let rest = &content[after..];
            let trimmed = rest.trim_start();
            if trimmed.starts_with(CLOSE) {
                return Some(HeaderBlock {
                    end: after + (rest.len() - trimmed.len()) + CLOSE.len(),
                    divider_run: opening_run,
                });
            }
        }
        None
    }

    /// Run length when `line` is a complete divider line, otherwise `None`.
    fn divider_run(&self, line: &str) -> Option<usize> {
        if !line.ends_with('\n') {
            return None;
        }
        let body = line.trim();
        if body.is_empty() || !body.chars().all(|c| c == self.delimiter) {
            return None;
        }
        let run = body.chars().count();
        (run >= self.min_run).then_some(run)
    }
}

impl Default for HeaderMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER, MIN_DIVIDER_RUN)
    }
}

fn is_blank_line(line: &str) -> bool {
    line.ends_with('\n') && line.trim().is_empty()
}

/// Newline-terminated lines of `content[from..]` with their absolute offsets.
fn line_spans(content: &str, from: usize) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = from;
    content[from..].split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        (start, line)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIVIDER: &str = "==============================================================================";

    fn block(body: &str) -> String {
        format!("/*\n  {DIVIDER}\n{body}\n  {DIVIDER}\n*/")
    }

    #[test]
    fn matches_juce_style_header() {
        let header = block("\n    Main.cpp\n    Created: 1 Jan 2020\n");
        let content = format!("{header}\n\n#include \"Main.h\"\n");
        let found = HeaderMatcher::default().find(&content).unwrap();
        assert_eq!(found.end, header.len());
        assert_eq!(found.divider_run, DIVIDER.len());
        assert_eq!(found.tail(&content), "\n\n#include \"Main.h\"\n");
    }

    #[test]
    fn must_start_at_offset_zero() {
        let content = format!("\n{}", block("body"));
        assert!(!HeaderMatcher::default().is_match(&content));

        let content = format!("// leading\n{}", block("body"));
        assert!(!HeaderMatcher::default().is_match(&content));
    }

    #[test]
    fn short_dividers_do_not_count() {
        let content = "/*\n  =========\n  body\n  =========\n*/\n";
        assert!(!HeaderMatcher::default().is_match(content));

        let content = "/*\n  ==========\n  body\n  ==========\n*/\n";
        assert!(HeaderMatcher::default().is_match(content));
    }

    #[test]
    fn stops_at_first_closing_marker() {
        let first = block("first");
        let content = format!("{first}\nint x;\n{}\n", block("second"));
        let found = HeaderMatcher::default().find(&content).unwrap();
        assert_eq!(found.end, first.len());
    }

    #[test]
    fn divider_without_close_is_treated_as_content() {
        let content = format!(
            "/*\n  {DIVIDER}\n  intro\n  {DIVIDER}\n  more notes\n  {DIVIDER}\n*/\nbody"
        );
        let found = HeaderMatcher::default().find(&content).unwrap();
        assert_eq!(found.tail(&content), "\nbody");
    }

    #[test]
    fn closing_divider_shorter_than_opening_is_content() {
        let content = format!("/*\n  {DIVIDER}\n  text\n  ==========\n*/\n");
        assert!(!HeaderMatcher::default().is_match(&content));
    }

    #[test]
    fn adjacent_dividers_need_a_content_line() {
        let content = format!("/*\n{DIVIDER}\n{DIVIDER}\n*/\n");
        assert!(!HeaderMatcher::default().is_match(&content));

        let content = format!("/*\n{DIVIDER}\n\n{DIVIDER}\n*/\n");
        assert!(HeaderMatcher::default().is_match(&content));
    }

    #[test]
    fn unterminated_block_is_no_match() {
        let content = format!("/*\n  {DIVIDER}\n  text\n  {DIVIDER}\n");
        assert!(!HeaderMatcher::default().is_match(&content));
    }

    #[test]
    fn blank_lines_around_dividers_are_tolerated() {
        let content = format!("/*  \n\n  {DIVIDER}  \n  text\n  {DIVIDER}\n\n   */rest");
        let found = HeaderMatcher::default().find(&content).unwrap();
        assert_eq!(found.tail(&content), "rest");
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let content = format!("/*\r\n  {DIVIDER}\r\n  text\r\n  {DIVIDER}\r\n*/\r\nrest");
        let found = HeaderMatcher::default().find(&content).unwrap();
        assert_eq!(found.tail(&content), "\r\nrest");
    }

    #[test]
    fn custom_delimiter() {
        let matcher = HeaderMatcher::new('-', 10);
        let content = "/*\n----------\nx\n----------\n*/";
        assert!(matcher.is_match(content));
        assert!(!HeaderMatcher::default().is_match(content));
    }
}
