//! Escape decoding for quoted string literals.
//!
//! Double-quoted strings understand `\\ \" \' \/ \0 \a \b \e \f \n \r \s
//! \t \v`, `\uXXXX` and `\u{X...}`. Single-quoted strings only
//! understand `\\` and `\'`. Anything else, malformed `\u` escapes
//! included, is kept as written.

use std::borrow::Cow;

/// Resolve a single-character escape of a double-quoted string.
#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '/' => Some('/'),
        '0' => Some('\0'),
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'e' => Some('\u{1B}'),
        'f' => Some('\u{0C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        's' => Some(' '),
        't' => Some('\t'),
        'v' => Some('\u{0B}'),
        _ => None,
    }
}

/// Decode a double-quoted string body.
pub(crate) fn unescape_double(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut result = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('\\') {
        result.push_str(&rest[..pos]);
        let escape = &rest[pos + 1..];
        let mut chars = escape.chars();
        match chars.next() {
            Some('u') => {
                let (decoded, used) = unicode_escape(&escape[1..]);
                match decoded {
                    Some(c) => result.push(c),
                    None => result.push_str("\\u"),
                }
                rest = &escape[1 + used..];
            }
            Some(c) => {
                match resolve_escape(c) {
                    Some(resolved) => result.push(resolved),
                    None => {
                        result.push('\\');
                        result.push(c);
                    }
                }
                rest = chars.as_str();
            }
            None => {
                result.push('\\');
                rest = "";
            }
        }
    }
    result.push_str(rest);
    Cow::Owned(result)
}

/// Decode the part of a `\u` escape after the `u`.
///
/// Returns the character and the number of bytes consumed, or `(None, 0)`
/// when the escape is malformed.
fn unicode_escape(s: &str) -> (Option<char>, usize) {
    if let Some(braced) = s.strip_prefix('{') {
        let Some(close) = braced.find('}') else {
            return (None, 0);
        };
        let digits = &braced[..close];
        if digits.is_empty() || digits.len() > 6 {
            return (None, 0);
        }
        return match hex_char(digits) {
            Some(c) => (Some(c), close + 2),
            None => (None, 0),
        };
    }

    match s.get(..4).and_then(hex_char) {
        Some(c) => (Some(c), 4),
        None => (None, 0),
    }
}

fn hex_char(digits: &str) -> Option<char> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
}

/// Decode a single-quoted string body.
pub(crate) fn unescape_single(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc @ ('\\' | '\'')) => result.push(esc),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    Cow::Owned(result)
}
