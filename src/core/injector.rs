//! Regex-based block substitution. Matching is syntactic text matching, not
//! DOM-aware: the page is an opaque string with exactly one mutable region,
//! and every byte outside it passes through untouched.

use crate::utils::error::{Result, SchemaError};
use regex::Regex;

/// Anchor the new block is inserted before when the page has no managed
/// block yet.
const HEAD_CLOSE: &str = "</head>";

/// How a pipeline's managed block is delimited inside the page. The two
/// pipelines use different conventions on purpose; they are never unified.
#[derive(Debug, Clone)]
pub enum BlockMarker {
    /// `<script id="...">...</script>`, recognized by its id attribute.
    ScriptId { id: String },
    /// An explicit comment pair wrapping the script element.
    CommentPair { start: String, end: String },
}

impl BlockMarker {
    pub fn script_id(id: &str) -> Self {
        BlockMarker::ScriptId { id: id.to_string() }
    }

    pub fn comment_pair(start: &str, end: &str) -> Self {
        BlockMarker::CommentPair {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Wrap serialized JSON-LD in this marker's delimiter convention.
    pub fn wrap(&self, jsonld: &str) -> String {
        match self {
            BlockMarker::ScriptId { id } => format!(
                "<script id=\"{}\" type=\"application/ld+json\">\n{}\n</script>",
                id, jsonld
            ),
            BlockMarker::CommentPair { start, end } => format!(
                "{}\n<script type=\"application/ld+json\">\n{}\n</script>\n{}",
                start, jsonld, end
            ),
        }
    }

    /// Pattern matching an existing managed block. Spans newlines; tag
    /// names and attributes match case-insensitively.
    fn block_pattern(&self) -> Result<Regex> {
        let pattern = match self {
            BlockMarker::ScriptId { id } => format!(
                r#"(?is)<script\s+id="{}"[^>]*?>.*?</script>"#,
                regex::escape(id)
            ),
            BlockMarker::CommentPair { start, end } => {
                format!(r"(?is){}.*?{}", regex::escape(start), regex::escape(end))
            }
        };
        Ok(Regex::new(&pattern)?)
    }
}

/// Whether the run replaced an existing block or inserted a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection {
    Replaced,
    Inserted,
}

/// Replace the first existing managed block with `new_block`, or insert it
/// right before the first `</head>` when the page has none.
///
/// The splice is assembled by hand from the match offsets rather than with
/// `Regex::replace`, so the block text is never subject to `$`-group
/// expansion.
pub fn replace_or_insert_block(
    html: &str,
    marker: &BlockMarker,
    new_block: &str,
) -> Result<(String, Injection)> {
    let pattern = marker.block_pattern()?;

    if let Some(found) = pattern.find(html) {
        let mut updated = String::with_capacity(html.len() + new_block.len());
        updated.push_str(&html[..found.start()]);
        updated.push_str(new_block);
        updated.push_str(&html[found.end()..]);
        return Ok((updated, Injection::Replaced));
    }

    tracing::warn!(
        "⚠️  No existing JSON-LD block found, inserting a new block before {}",
        HEAD_CLOSE
    );

    let anchor = Regex::new(&format!("(?i){}", regex::escape(HEAD_CLOSE)))?;
    let Some(found) = anchor.find(html) else {
        return Err(SchemaError::AnchorNotFoundError {
            anchor: HEAD_CLOSE.to_string(),
        });
    };

    let mut updated = String::with_capacity(html.len() + new_block.len() + 1);
    updated.push_str(&html[..found.start()]);
    updated.push_str(new_block);
    updated.push('\n');
    updated.push_str(&html[found.start()..]);
    Ok((updated, Injection::Inserted))
}
