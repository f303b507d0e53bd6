//! Text normalization.
//!
//! Reviews come with leftover HTML (`<br />` line breaks, entities) and irregular spacing.
//! [Normalize] is the seam, [TextPreprocess] the default cleaning.

/// pure transform (2 successive equal inputs -> 2 equal outputs)
pub trait Normalize {
    fn normalize(&self, raw: &str) -> String;
}

impl<F> Normalize for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Default review cleaning:
/// - `<br>`, `<br/>` and `<br />` (any case) become spaces,
/// - HTML entities are unescaped,
/// - whitespace runs collapse into a single space and ends are trimmed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPreprocess;

impl Normalize for TextPreprocess {
    fn normalize(&self, raw: &str) -> String {
        let text = replace_line_breaks(raw);
        let text = unescape(&text);
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

fn replace_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match line_break_len(tail) {
            Some(len) => {
                out.push(' ');
                rest = &tail[len..];
            }
            None => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

const MAX_BREAK_LEN: usize = 16;

/// length of a `<br ... >` tag at the start of `tail`, if any.
fn line_break_len(tail: &str) -> Option<usize> {
    let head = tail.get(..3)?;
    if !head.eq_ignore_ascii_case("<br") {
        return None;
    }
    let end = tail.bytes().take(MAX_BREAK_LEN).position(|b| b == b'>')?;
    let inner = tail[3..end].trim();
    if inner.is_empty() || inner == "/" {
        Some(end + 1)
    } else {
        None
    }
}

/// `&#x10FFFF;`, the longest entity we decode, in bytes.
const MAX_ENTITY_LEN: usize = 10;

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = tail.bytes().take(MAX_ENTITY_LEN).position(|b| b == b';');
        match end.and_then(|end| Some((end, entity(&tail[1..end])?))) {
            Some((end, c)) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
