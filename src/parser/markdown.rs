use crate::parser::highlight::Highlighter;
use pulldown_cmark::{
    CodeBlockKind, CowStr, Event, HeadingLevel, Options as CmarkOptions, Parser, Tag, TagEnd, html,
};
use std::collections::HashMap;

pub fn markdown_options() -> CmarkOptions {
    let mut options = CmarkOptions::empty();
    options.insert(CmarkOptions::ENABLE_TABLES);
    options.insert(CmarkOptions::ENABLE_STRIKETHROUGH);
    options.insert(CmarkOptions::ENABLE_TASKLISTS);
    options
}

// compiles markdown into html the way the site expects it:
// single newlines become <br />, every heading gets an id anchor, code blocks come out highlighted
pub fn compile_markdown_to_html(markdown_content: &str, highlighter: &Highlighter) -> String {
    let parser = Parser::new_ext(markdown_content, markdown_options());

    let mut sink = EventSink::default();
    let mut code_block: Option<CodeBuffer> = None;

    for event in parser {
        // everything inside a code block is collected as raw text and emitted in one go
        if let Some(block) = code_block.as_mut() {
            match event {
                Event::Text(text) => block.code.push_str(&text),
                Event::End(TagEnd::CodeBlock) => {
                    let highlighted = highlighter.highlight(&block.code, block.language.as_deref());
                    sink.push(Event::Html(highlighted.to_block_html().into()));
                    code_block = None;
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                code_block = Some(CodeBuffer {
                    language: fence_language(&kind),
                    code: String::new(),
                });
            }
            Event::SoftBreak => sink.push(Event::HardBreak),
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => {
                sink.heading = Some(HeadingBuffer {
                    level,
                    id,
                    classes,
                    attrs,
                    inner: Vec::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) => sink.finish_heading(),
            other => sink.push(other),
        }
    }

    let mut html_content = String::new();
    html::push_html(&mut html_content, sink.events.into_iter());

    html_content
}

struct CodeBuffer {
    language: Option<String>,
    code: String,
}

struct HeadingBuffer<'a> {
    level: HeadingLevel,
    id: Option<CowStr<'a>>,
    classes: Vec<CowStr<'a>>,
    attrs: Vec<(CowStr<'a>, Option<CowStr<'a>>)>,
    inner: Vec<Event<'a>>,
}

#[derive(Default)]
struct EventSink<'a> {
    events: Vec<Event<'a>>,
    heading: Option<HeadingBuffer<'a>>,
    slugs: HeadingSlugs,
}

impl<'a> EventSink<'a> {
    fn push(&mut self, event: Event<'a>) {
        match self.heading.as_mut() {
            Some(heading) => heading.inner.push(event),
            None => self.events.push(event),
        }
    }

    // a heading's id can only be known once its text has been seen
    fn finish_heading(&mut self) {
        let Some(heading) = self.heading.take() else {
            return;
        };

        let id = match heading.id {
            Some(explicit) => self.slugs.claim(explicit.to_string()),
            None => self.slugs.claim(slugify(&heading_text(&heading.inner))),
        };

        self.events.push(Event::Start(Tag::Heading {
            level: heading.level,
            id: Some(id.into()),
            classes: heading.classes,
            attrs: heading.attrs,
        }));
        self.events.extend(heading.inner);
        self.events.push(Event::End(TagEnd::Heading(heading.level)));
    }
}

// ids already handed out in this document, so repeated headings get -1, -2, ...
#[derive(Default)]
struct HeadingSlugs {
    seen: HashMap<String, usize>,
}

impl HeadingSlugs {
    fn claim(&mut self, slug: String) -> String {
        let slug = if slug.is_empty() {
            "heading".to_string()
        } else {
            slug
        };

        if !self.seen.contains_key(&slug) {
            self.seen.insert(slug.clone(), 0);
            return slug;
        }

        // the suffixed id may itself already be taken by an earlier heading
        let mut count = self.seen.get(&slug).copied().unwrap_or(0);
        let unique = loop {
            count += 1;
            let candidate = format!("{}-{}", slug, count);
            if !self.seen.contains_key(&candidate) {
                break candidate;
            }
        };

        self.seen.insert(slug, count);
        self.seen.insert(unique.clone(), 0);
        unique
    }
}

fn heading_text(events: &[Event]) -> String {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Text(text) | Event::Code(text) => Some(&**text),
            _ => None,
        })
        .collect()
}

/// Lower-cases, drops punctuation and joins words with `-`. Letters of any script survive.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().to_lowercase().chars() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            slug.push(c);
        } else if c.is_whitespace() {
            slug.push('-');
        }
    }
    slug
}

// "rust,ignore" and "rust title=x" both mean rust
fn fence_language(kind: &CodeBlockKind) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => info
            .split(|c: char| c.is_whitespace() || c == ',')
            .next()
            .filter(|lang| !lang.is_empty())
            .map(str::to_string),
        CodeBlockKind::Indented => None,
    }
}
