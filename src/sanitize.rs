//! Input sanitization for user-typed label fields.

/// Strips unsafe content from free-text input.
pub trait Sanitizer: Send + Sync {
    fn input(&self, value: &str) -> String;
}

/// Elements removed together with everything inside them.
const DROPPED_ELEMENTS: [&str; 9] = [
    "script", "style", "iframe", "object", "embed", "noscript", "template", "svg", "math",
];

/// Removes markup from text while keeping the text content of harmless tags.
///
/// Comments and tags are dropped and the contents of script-like elements
/// are dropped along with them. Remaining text is kept verbatim, so
/// sanitizing an already clean value returns it unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSanitizer;

impl HtmlSanitizer {
    pub fn new() -> Self {
        Self
    }
}

impl Sanitizer for HtmlSanitizer {
    fn input(&self, value: &str) -> String {
        // Stripping can splice new markup together (`<<b>b>`), so repeat until stable
        let mut current = strip_markup(value);
        loop {
            let next = strip_markup(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }
}

fn strip_markup(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '<' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        match parse_markup(&chars, i) {
            Markup::Comment { end } => i = end,
            Markup::Tag { name, closing, self_closing, end } => {
                i = end;
                if !closing && !self_closing && DROPPED_ELEMENTS.contains(&name.as_str()) {
                    i = skip_element_body(&chars, i, &name);
                }
            }
            Markup::Unterminated => break,
            Markup::Text => {
                out.push('<');
                i += 1;
            }
        }
    }

    out
}

enum Markup {
    Comment { end: usize },
    Tag { name: String, closing: bool, self_closing: bool, end: usize },
    /// A tag that never closes swallows the rest of the input.
    Unterminated,
    /// A bare `<` that does not start markup.
    Text,
}

fn starts_with_at(chars: &[char], at: usize, pattern: &str) -> bool {
    let mut idx = at;
    for p in pattern.chars() {
        match chars.get(idx) {
            Some(c) if c.eq_ignore_ascii_case(&p) => idx += 1,
            _ => return false,
        }
    }
    true
}

fn parse_markup(chars: &[char], start: usize) -> Markup {
    if starts_with_at(chars, start, "<!--") {
        let mut i = start + 4;
        while i < chars.len() {
            if starts_with_at(chars, i, "-->") {
                return Markup::Comment { end: i + 3 };
            }
            i += 1;
        }
        return Markup::Comment { end: chars.len() };
    }

    let mut i = start + 1;
    let closing = chars.get(i) == Some(&'/');
    if closing {
        i += 1;
    }

    // `<!doctype ...>` and `<?...>` are markup without a proper name
    let bang = matches!(chars.get(i), Some('!') | Some('?'));
    if !bang && !chars.get(i).is_some_and(|c| c.is_ascii_alphabetic()) {
        return Markup::Text;
    }

    let mut name = String::new();
    if !bang {
        while let Some(c) = chars.get(i) {
            if c.is_ascii_alphanumeric() || *c == '-' {
                name.push(c.to_ascii_lowercase());
                i += 1;
            } else {
                break;
            }
        }
    }

    let mut quote: Option<char> = None;
    while let Some(&c) = chars.get(i) {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => {
                let self_closing = i > start && chars[i - 1] == '/';
                return Markup::Tag {
                    name,
                    closing,
                    self_closing,
                    end: i + 1,
                };
            }
            None => {}
        }
        i += 1;
    }

    Markup::Unterminated
}

/// Returns the index just past `</name ...>`, or the end of input.
fn skip_element_body(chars: &[char], from: usize, name: &str) -> usize {
    let closing = format!("</{name}");
    let mut i = from;
    while i < chars.len() {
        if starts_with_at(chars, i, &closing) {
            let after = i + closing.chars().count();
            let boundary = chars.get(after).map_or(true, |c| !c.is_ascii_alphanumeric());
            if boundary {
                return chars[after..]
                    .iter()
                    .position(|c| *c == '>')
                    .map_or(chars.len(), |p| after + p + 1);
            }
        }
        i += 1;
    }
    chars.len()
}
