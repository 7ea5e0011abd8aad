use crate::parser::html::{escape_html, strip_tags};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

// marks a block as already processed so the live region pass leaves it alone
const HIGHLIGHTED_MARKER: &str = r#"data-highlighted="yes""#;

/// A code block after highlighting: the language it was highlighted as and the
/// class-annotated markup for its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedCode {
    pub language: String,
    pub html: String,
}

impl HighlightedCode {
    pub fn to_block_html(&self) -> String {
        format!(
            "<pre><code class=\"hljs language-{}\" {}>{}</code></pre>\n",
            self.language, HIGHLIGHTED_MARKER, self.html
        )
    }
}

// a guess needs at least this many distinct markers, one stray keyword is not enough
const MIN_GUESS_SCORE: usize = 2;

// markers are matched against the lower-cased code
const CONTENT_SIGNATURES: &[(&str, &[&str])] = &[
    ("rust", &["fn ", "let mut ", "impl ", "pub fn", "::", "-> ", "&self"]),
    ("python", &["def ", "import ", "elif ", "self.", "print(", "):\n"]),
    ("javascript", &["function ", "const ", "=> ", "console.", "document.", "===", "require("]),
    ("html", &["<!doctype", "<html", "<div", "</", "<p>", "<a href"]),
    ("css", &["{\n", "color:", "margin:", "padding:", "font-", "display:"]),
    ("sql", &["select ", " from ", " where ", "insert into", "create table", "join "]),
    ("bash", &["echo ", "fi\n", "then\n", "export ", "sudo ", "$("]),
    ("json", &["\": ", "{\n  \"", "[\n", "\": {", "\": ["]),
];

pub struct Highlighter {
    syntaxes: SyntaxSet,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
        }
    }

    pub fn is_known_language(&self, language: &str) -> bool {
        self.syntaxes.find_syntax_by_token(language).is_some()
    }

    /// Picks the syntax for a block: the declared language when syntect knows it,
    /// then a shebang or modeline on the first line, then a keyword guess over
    /// the code. The guess only knows the languages in `CONTENT_SIGNATURES`;
    /// anything else is emitted as plain text.
    fn resolve_syntax(&self, code: &str, language: Option<&str>) -> (&SyntaxReference, String) {
        if let Some(language) = language.filter(|l| !l.is_empty()) {
            if let Some(syntax) = self.syntaxes.find_syntax_by_token(language) {
                return (syntax, language.to_lowercase());
            }
        }

        let detected = code
            .lines()
            .next()
            .and_then(|first_line| self.syntaxes.find_syntax_by_first_line(first_line));

        if let Some(syntax) = detected {
            return (syntax, language_slug(&syntax.name));
        }

        if let Some((token, syntax)) = self.guess_by_content(code) {
            return (syntax, token.to_string());
        }

        (self.syntaxes.find_syntax_plain_text(), "plaintext".to_string())
    }

    // the language whose markers show up most often, ties go to the earlier entry
    fn guess_by_content(&self, code: &str) -> Option<(&'static str, &SyntaxReference)> {
        let lowered = code.to_lowercase();

        let (token, score) = CONTENT_SIGNATURES
            .iter()
            .map(|(token, markers)| {
                let score = markers.iter().filter(|m| lowered.contains(*m)).count();
                (*token, score)
            })
            .fold(("", 0), |best, candidate| {
                if candidate.1 > best.1 { candidate } else { best }
            });

        if score < MIN_GUESS_SCORE {
            return None;
        }

        self.syntaxes
            .find_syntax_by_token(token)
            .map(|syntax| (token, syntax))
    }

    pub fn highlight(&self, code: &str, language: Option<&str>) -> HighlightedCode {
        let (syntax, language) = self.resolve_syntax(code, language);

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, ClassStyle::Spaced);

        for line in LinesWithEndings::from(code) {
            if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
                tracing::warn!("Highlighter: falling back to plain text for {}: {}", language, e);
                return HighlightedCode {
                    language,
                    html: escape_html(code),
                };
            }
        }

        HighlightedCode {
            language,
            html: generator.finalize(),
        }
    }

    /// Highlights every `<pre><code>` block in `html` that does not carry the
    /// highlighted marker yet. Already highlighted blocks are copied through untouched.
    pub fn highlight_code_blocks(&self, html: &str) -> String {
        const OPEN: &str = "<pre><code";
        const CLOSE: &str = "</code></pre>";

        let mut output = String::with_capacity(html.len());
        let mut rest = html;

        while let Some(start) = rest.find(OPEN) {
            output.push_str(&rest[..start]);
            let block = &rest[start..];

            let open_end = block["<pre>".len()..]
                .find('>')
                .map(|i| "<pre>".len() + i);
            let close = block.find(CLOSE);

            let (Some(open_end), Some(close)) = (open_end, close) else {
                // unterminated block, nothing more we can safely rewrite
                output.push_str(block);
                return output;
            };

            let end = close + CLOSE.len();
            let open_tag = &block["<pre>".len()..=open_end];

            if open_tag.contains(HIGHLIGHTED_MARKER) || close < open_end {
                output.push_str(&block[..end]);
            } else {
                let code = strip_tags(&block[open_end + 1..close]);
                let highlighted = self.highlight(&code, declared_language(open_tag));
                output.push_str(highlighted.to_block_html().trim_end());
            }

            rest = &block[end..];
        }

        output.push_str(rest);
        output
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

// "language-rust" out of a <code class="..."> tag
fn declared_language(open_tag: &str) -> Option<&str> {
    let start = open_tag.find("language-")? + "language-".len();
    let tail = &open_tag[start..];
    let end = tail
        .find(|c: char| c.is_whitespace() || c == '"' || c == '\'' || c == '>')
        .unwrap_or(tail.len());
    Some(&tail[..end])
}

fn language_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
