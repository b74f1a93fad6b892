use std::collections::HashMap;

use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Html, Node, Selector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub title: Option<String>,
    pub text: String,
}

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> ExtractedArticle;
}

/// Elements whose whole subtree never contributes article text.
const SKIPPED: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "aside", "form", "template",
    "svg", "iframe", "button",
];

/// Elements emitted as one paragraph of output text.
const BLOCKS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "blockquote", "pre", "figcaption",
];

/// Lightweight "readability-like" article extractor:
/// - title from `og:title`, falling back to `<title>`
/// - body from the first `<article>` that yields text
/// - otherwise from the element whose direct `<p>` children hold the most text
/// - otherwise from `<body>`.
///
/// Paragraph-level blocks are whitespace-normalized and joined by blank lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReadabilityLikeExtractor;

impl Extractor for ReadabilityLikeExtractor {
    fn extract(&self, html: &str) -> ExtractedArticle {
        let doc = Html::parse_document(html);
        let title = extract_title(&doc);

        let mut blocks = Vec::new();
        if let Ok(sel) = Selector::parse("article") {
            for article in doc.select(&sel) {
                collect_blocks(*article, &mut blocks);
                if !blocks.is_empty() {
                    break;
                }
            }
        }

        if blocks.is_empty() {
            if let Some(node) = densest_paragraph_container(&doc) {
                collect_blocks(node, &mut blocks);
            }
        }

        if blocks.is_empty() {
            let body = Selector::parse("body")
                .ok()
                .and_then(|sel| doc.select(&sel).next());
            if let Some(body) = body {
                collect_blocks(*body, &mut blocks);
                if blocks.is_empty() {
                    let mut raw = String::new();
                    visible_text(*body, &mut raw);
                    let text = normalize_whitespace(&raw);
                    if !text.is_empty() {
                        blocks.push(text);
                    }
                }
            }
        }

        ExtractedArticle {
            title,
            text: blocks.join("\n\n"),
        }
    }
}

fn extract_title(doc: &Html) -> Option<String> {
    let og = Selector::parse(r#"meta[property="og:title"]"#)
        .ok()
        .and_then(|sel| {
            doc.select(&sel)
                .find_map(|meta| meta.value().attr("content"))
                .map(normalize_whitespace)
        })
        .filter(|t| !t.is_empty());
    if og.is_some() {
        return og;
    }

    Selector::parse("title")
        .ok()
        .and_then(|sel| doc.select(&sel).next())
        .map(|t| normalize_whitespace(&t.text().collect::<String>()))
        .filter(|t| !t.is_empty())
}

fn densest_paragraph_container(doc: &Html) -> Option<NodeRef<'_, Node>> {
    let sel = Selector::parse("p").ok()?;
    let mut scores: HashMap<NodeId, usize> = HashMap::new();
    for paragraph in doc.select(&sel) {
        if paragraph.ancestors().any(is_skipped) {
            continue;
        }
        let Some(parent) = paragraph.parent() else {
            continue;
        };
        let len = normalize_whitespace(&paragraph.text().collect::<String>()).len();
        *scores.entry(parent.id()).or_default() += len;
    }

    // Ties resolve to the node that appears first in the document.
    let best = scores
        .into_iter()
        .filter(|(_, score)| *score > 0)
        .max_by(|(a_id, a), (b_id, b)| a.cmp(b).then_with(|| b_id.cmp(a_id)))?;
    doc.tree.get(best.0)
}

fn is_skipped(node: NodeRef<'_, Node>) -> bool {
    node.value()
        .as_element()
        .is_some_and(|el| SKIPPED.contains(&el.name()))
}

/// Emits block elements as paragraphs. Loose text between blocks (bare text
/// nodes plus inline markup) forms a paragraph of its own.
fn collect_blocks(node: NodeRef<'_, Node>, out: &mut Vec<String>) {
    let mut loose = String::new();
    for child in node.children() {
        match child.value() {
            Node::Text(text) => loose.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED.contains(&name) {
                    continue;
                }
                if BLOCKS.contains(&name) {
                    flush_paragraph(&mut loose, out);
                    let mut raw = String::new();
                    visible_text(child, &mut raw);
                    flush_paragraph(&mut raw, out);
                } else if contains_block(child) {
                    flush_paragraph(&mut loose, out);
                    collect_blocks(child, out);
                } else {
                    if name == "br" {
                        loose.push(' ');
                    }
                    visible_text(child, &mut loose);
                }
            }
            _ => {}
        }
    }
    flush_paragraph(&mut loose, out);
}

fn contains_block(node: NodeRef<'_, Node>) -> bool {
    node.descendants().skip(1).any(|n| {
        n.value()
            .as_element()
            .is_some_and(|el| BLOCKS.contains(&el.name()))
            && !n.ancestors().any(is_skipped)
    })
}

fn flush_paragraph(raw: &mut String, out: &mut Vec<String>) {
    let text = normalize_whitespace(raw);
    if !text.is_empty() {
        out.push(text);
    }
    raw.clear();
}

fn visible_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if SKIPPED.contains(&el.name()) => {}
            Node::Element(el) => {
                if el.name() == "br" {
                    out.push(' ');
                }
                visible_text(child, out);
            }
            _ => {}
        }
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::normalize_whitespace;

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
        assert_eq!(normalize_whitespace(" \n "), "");
    }
}
