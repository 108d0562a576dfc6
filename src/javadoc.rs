//! Doc-comment handling: text assembly, normalization and tag parsing.
//!
//! Exported methods document themselves with Javadoc-style tags inside
//! ordinary doc comments:
//!
//! ```text
//! /// Creates a user. Returns the new id.
//! ///
//! /// @param user the payload describing the new user
//! /// @response.representation.200.doc The freshly created user
//! /// @response.representation.200.model models.User
//! ```
//!
//! The text before the first `@` splits into summary and description; each
//! tag's text runs to the next `@` or the end of the comment.

use log::debug;
use std::collections::HashMap;
use syn::{Attribute, Expr, Lit, Meta};

use crate::extractor::ResponseDescriptor;

/// Joined text of a node's doc comment, line per line, or `None` when the
/// node has no doc comment at all.
pub fn doc_text(attrs: &[Attribute]) -> Option<String> {
    let mut lines = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        if let Meta::NameValue(name_value) = &attr.meta {
            if let Expr::Lit(expr_lit) = &name_value.value {
                if let Lit::Str(lit_str) = &expr_lit.lit {
                    lines.push(lit_str.value());
                }
            }
        }
    }
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Normalizes a piece of doc text to a single line.
///
/// Trims; strips a leading `/**` opener and trailing `*/` closer if present;
/// drops every `*` together with the run of spaces immediately before it;
/// turns newlines into spaces; folds each occurrence of exactly two spaces
/// into one (a single left-to-right pass, not a general whitespace
/// collapse); trims again.
pub fn doc_to_line(raw: &str) -> String {
    let mut line = raw.trim();
    if let Some(stripped) = line.strip_prefix("/**") {
        line = stripped.strip_suffix("*/").unwrap_or(stripped);
    }

    let mut cleaned = String::with_capacity(line.len());
    for ch in line.chars() {
        if ch == '*' {
            while cleaned.ends_with(' ') {
                cleaned.pop();
            }
        } else {
            cleaned.push(ch);
        }
    }

    cleaned
        .replace('\n', " ")
        .replace("  ", " ")
        .trim()
        .to_string()
}

/// Everything a method's doc comment contributes to its entry.
#[derive(Debug, Clone, Default)]
pub struct DocBlock {
    /// Text before the first `.` of the pre-tag text; may be empty
    pub summary: String,
    /// Text after that `.`, leading whitespace preserved; may be empty
    pub description: String,
    /// Responses in tag order; may be empty (the caller substitutes the
    /// fallback)
    pub responses: Vec<ResponseDescriptor>,
    /// `@param` texts keyed by declared argument name; later tags overwrite
    pub params: HashMap<String, String>,
    /// Every `model` tag occurrence in order, duplicates included; the
    /// assembler's registration dedupes
    pub models: Vec<String>,
}

/// Parses one method's doc comment text.
pub fn parse_doc(jdoc: &str) -> DocBlock {
    let mut block = DocBlock::default();

    let at = jdoc.find('@').unwrap_or(jdoc.len());
    let description = doc_to_line(&jdoc[..at]);
    if !description.is_empty() {
        match description.find('.') {
            None => block.summary = description,
            Some(dot) => {
                block.summary = description[..dot].to_string();
                block.description = description[dot + 1..].to_string();
            }
        }
    }

    scan_response_tags(jdoc, &mut block);
    scan_param_tags(jdoc, &mut block);

    block
}

/// Scans `@response.representation.<code>.<kind> <text>` tags.
///
/// A `doc` kind opens a new response keyed by `<code>`; a `model` kind
/// attaches a schema reference to the most recently opened response and is
/// recorded for registration either way. Tags missing their `.` or ` `
/// delimiters are skipped.
fn scan_response_tags(jdoc: &str, block: &mut DocBlock) {
    const PATTERN: &str = "@response.representation.";

    let mut end = 0;
    while let Some(found) = jdoc[end..].find(PATTERN) {
        let start = end + found;
        end = match jdoc[start + 1..].find('@') {
            Some(next) => start + 1 + next,
            None => jdoc.len(),
        };

        let after = start + PATTERN.len();
        let Some(dot) = jdoc[after..].find('.').map(|i| after + i) else {
            continue;
        };
        let Some(space) = jdoc[after..].find(' ').map(|i| after + i) else {
            continue;
        };
        if dot + 1 > space || space > end {
            continue;
        }

        match &jdoc[dot + 1..space] {
            "doc" => {
                let code = &jdoc[after..dot];
                let description = doc_to_line(&jdoc[space..end]);
                block
                    .responses
                    .push(ResponseDescriptor::documented(code, description));
            }
            "model" => {
                let model = doc_to_line(&jdoc[space..end]);
                match block.responses.last_mut() {
                    Some(last) => last.schema_ref = Some(model.clone()),
                    None => debug!(
                        "Model reference {} has no preceding response description, dropping the schema",
                        model
                    ),
                }
                block.models.push(model);
            }
            _ => {}
        }
    }
}

/// Scans `@param <name> <text>` tags into the params map.
fn scan_param_tags(jdoc: &str, block: &mut DocBlock) {
    const PATTERN: &str = "@param ";

    let mut end = 0;
    while let Some(found) = jdoc[end..].find(PATTERN) {
        let start = end + found;
        end = match jdoc[start + 1..].find('@') {
            Some(next) => start + 1 + next,
            None => jdoc.len(),
        };

        let after = start + PATTERN.len();
        let Some(space) = jdoc[after..].find(' ').map(|i| after + i) else {
            continue;
        };
        if space >= end {
            continue;
        }

        let name = jdoc[after..space].trim().to_string();
        let description = doc_to_line(&jdoc[space + 1..end]);
        block.params.insert(name, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Doc text of the first method in a snippet.
    fn doc_of(code: &str) -> Option<String> {
        let file = syn::parse_file(code).expect("Failed to parse test code");
        for item in file.items {
            if let syn::Item::Impl(item_impl) = item {
                for impl_item in item_impl.items {
                    if let syn::ImplItem::Fn(method) = impl_item {
                        return doc_text(&method.attrs);
                    }
                }
            }
        }
        panic!("no method in test code");
    }

    #[test]
    fn test_doc_text_joins_lines() {
        let doc = doc_of(
            r#"
            impl R {
                /// First line.
                /// Second line.
                fn f(&self) {}
            }
        "#,
        );
        assert_eq!(doc, Some(" First line.\n Second line.".to_string()));
    }

    #[test]
    fn test_doc_text_absent() {
        let doc = doc_of(
            r#"
            impl R {
                fn f(&self) {}
            }
        "#,
        );
        assert_eq!(doc, None);
    }

    #[test]
    fn test_doc_to_line_trims_and_joins() {
        assert_eq!(doc_to_line("  Creates a user.  \n"), "Creates a user.");
        assert_eq!(doc_to_line("line one\nline two"), "line one line two");
    }

    #[test]
    fn test_doc_to_line_strips_asterisks() {
        assert_eq!(doc_to_line("/** Creates a user. */"), "Creates a user.");
        assert_eq!(doc_to_line("first\n   * second"), "first second");
    }

    #[test]
    fn test_doc_to_line_folds_double_spaces_once() {
        // A single pass: four spaces fold to two, not to one
        assert_eq!(doc_to_line("a  b"), "a b");
        assert_eq!(doc_to_line("a    b"), "a  b");
    }

    #[test]
    fn test_summary_splits_at_first_period() {
        let block = parse_doc(" Creates a user. Returns the new id.");
        assert_eq!(block.summary, "Creates a user");
        assert_eq!(block.description, " Returns the new id.");
    }

    #[test]
    fn test_summary_without_period_keeps_whole_text() {
        let block = parse_doc(" Lists every user");
        assert_eq!(block.summary, "Lists every user");
        assert_eq!(block.description, "");
    }

    #[test]
    fn test_empty_doc_gives_empty_summary() {
        let block = parse_doc("   ");
        assert_eq!(block.summary, "");
        assert_eq!(block.description, "");
    }

    #[test]
    fn test_summary_stops_at_first_tag() {
        let block = parse_doc(" Fetches a user.\n @param id the id");
        assert_eq!(block.summary, "Fetches a user");
        assert_eq!(block.description, "");
    }

    #[test]
    fn test_response_doc_tag() {
        let block = parse_doc(" @response.representation.200.doc The user");
        assert_eq!(block.responses.len(), 1);
        assert_eq!(block.responses[0].status, "200");
        assert_eq!(block.responses[0].description, "The user");
        assert_eq!(block.responses[0].schema_ref, None);
        assert!(block.models.is_empty());
    }

    #[test]
    fn test_response_model_attaches_to_preceding_doc() {
        let block = parse_doc(
            " @response.representation.200.doc The user\n @response.representation.200.model models.User",
        );
        assert_eq!(block.responses.len(), 1);
        assert_eq!(
            block.responses[0].schema_ref,
            Some("models.User".to_string())
        );
        assert_eq!(block.models, vec!["models.User".to_string()]);
    }

    #[test]
    fn test_response_model_without_doc_still_registers() {
        let block = parse_doc(" @response.representation.200.model models.Ghost");
        assert!(block.responses.is_empty());
        assert_eq!(block.models, vec!["models.Ghost".to_string()]);
    }

    #[test]
    fn test_second_model_tag_overwrites_the_slot() {
        let block = parse_doc(
            " @response.representation.200.doc The user\n @response.representation.200.model models.A\n @response.representation.200.model models.B",
        );
        assert_eq!(block.responses.len(), 1);
        assert_eq!(block.responses[0].schema_ref, Some("models.B".to_string()));
        assert_eq!(
            block.models,
            vec!["models.A".to_string(), "models.B".to_string()]
        );
    }

    #[test]
    fn test_multiple_response_codes() {
        let block = parse_doc(
            " @response.representation.200.doc All good\n @response.representation.404.doc No such user",
        );
        assert_eq!(block.responses.len(), 2);
        assert_eq!(block.responses[0].status, "200");
        assert_eq!(block.responses[1].status, "404");
        assert_eq!(block.responses[1].description, "No such user");
    }

    #[test]
    fn test_unknown_response_kind_is_ignored() {
        let block = parse_doc(" @response.representation.200.headers X-Flag");
        assert!(block.responses.is_empty());
        assert!(block.models.is_empty());
    }

    #[test]
    fn test_response_tag_text_spans_lines() {
        let block =
            parse_doc(" @response.representation.200.doc The user\n with every field filled");
        assert_eq!(block.responses.len(), 1);
        assert_eq!(
            block.responses[0].description,
            "The user with every field filled"
        );
    }

    #[test]
    fn test_param_tag() {
        let block = parse_doc(" @param id numeric id of the user");
        assert_eq!(
            block.params.get("id"),
            Some(&"numeric id of the user".to_string())
        );
    }

    #[test]
    fn test_param_tags_overwrite_by_name() {
        let block = parse_doc(" @param id first text\n @param id second text");
        assert_eq!(block.params.get("id"), Some(&"second text".to_string()));
    }

    #[test]
    fn test_param_and_response_tags_together() {
        let block = parse_doc(
            " Creates a user. Returns the new id.\n @param user the payload\n @response.representation.200.doc Created",
        );
        assert_eq!(block.summary, "Creates a user");
        assert_eq!(block.description, " Returns the new id.");
        assert_eq!(block.params.get("user"), Some(&"the payload".to_string()));
        assert_eq!(block.responses.len(), 1);
    }

    #[test]
    fn test_malformed_tags_are_skipped() {
        // No space after the tag head, no kind separator
        let block = parse_doc(" @response.representation.200@param x");
        assert!(block.responses.is_empty());
        let block = parse_doc(" @param onlyname");
        assert!(block.params.is_empty());
    }
}
