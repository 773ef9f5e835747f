//! Snippet Renderer
//!
//! Renders the usage snippets of the component gallery: pulldown-cmark for
//! the markdown, syntect for the fenced code blocks.

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

const THEME_NAME: &str = "base16-ocean.dark";

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get(THEME_NAME)
}

/// Render markdown with highlighted code blocks
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_TABLES);
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

// State for the event transformer
enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

/// Swap code block events for pre-highlighted HTML
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    get_theme()
        .and_then(|theme| highlighted_html_for_string(code, ss, syntax, theme).ok())
        .unwrap_or_else(|| format!("<pre><code>{}</code></pre>", escape_html(code)))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Source text of the first fenced block, for copying
pub fn first_code_block(text: &str) -> Option<String> {
    let mut inside = false;
    let mut code = String::new();
    for event in Parser::new(text) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => inside = true,
            Event::Text(t) if inside => code.push_str(&t),
            Event::End(TagEnd::CodeBlock) => return Some(code),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNIPPET: &str = "Usage:\n\n```rust\nview! { <Card/> }\n```\n";

    #[test]
    fn test_code_block_is_highlighted() {
        let html = parse_markdown(SNIPPET);
        assert!(html.contains("<p>Usage:</p>"));
        assert!(html.contains("<pre style="));
        assert!(!html.contains("<code class=\"language-rust\">"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let html = parse_markdown("```nope\n<b>\n```\n");
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_first_code_block() {
        assert_eq!(first_code_block(SNIPPET).as_deref(), Some("view! { <Card/> }\n"));
        assert_eq!(first_code_block("no code"), None);
    }
}
