// small helpers for reading text back out of rendered html
// the search index needs plain text and titles, the highlighter needs raw code back

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Decodes the named entities pulldown-cmark and syntect emit, plus numeric references.
/// Unknown entities are left as written.
pub fn decode_entities(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        let candidate = &rest[amp..];

        let replacement = candidate
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&candidate[1..semi]).map(|c| (c, semi)));

        match replacement {
            Some((c, semi)) => {
                decoded.push(c);
                rest = &candidate[semi + 1..];
            }
            None => {
                decoded.push('&');
                rest = &candidate[1..];
            }
        }
    }

    decoded.push_str(rest);
    decoded
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Drops every tag and returns the decoded text content.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match (in_tag, c) {
            (false, '<') => in_tag = true,
            (true, '>') => in_tag = false,
            (false, _) => text.push(c),
            (true, _) => {}
        }
    }

    decode_entities(&text)
}

/// Text of the first `<h1 ...>` whose content is plain text (no nested tags).
pub fn extract_title(html: &str) -> Option<String> {
    // ascii lowercasing keeps byte offsets identical to the source
    let lowered = html.to_ascii_lowercase();
    let mut offset = 0;

    while let Some(found) = lowered[offset..].find("<h1") {
        let start = offset + found;
        offset = start + 3;

        let after_name = lowered[offset..].chars().next();
        if !matches!(after_name, Some(c) if c == '>' || c.is_ascii_whitespace()) {
            continue;
        }

        let Some(open_end) = lowered[offset..].find('>').map(|i| offset + i + 1) else {
            return None;
        };
        let Some(text_end) = lowered[open_end..].find('<').map(|i| open_end + i) else {
            return None;
        };

        let title = &html[open_end..text_end];
        if !title.is_empty() && lowered[text_end..].starts_with("</h1>") {
            return Some(decode_entities(title));
        }
    }

    None
}
