// ── Value escaping ──
//
// SSIDs and passwords are escaped before they go into a payload. Backslash
// is handled first so inserted escapes are never escaped again.

/// Characters that carry meaning inside a payload, in escaping order.
pub const SPECIAL_CHARS: [char; 5] = ['\\', '"', ';', ',', ':'];

const ESCAPE: char = '\\';

/// Prefix each of `\ " ; , :` with a backslash.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if SPECIAL_CHARS.contains(&ch) {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
    out
}

/// Reverse [`escape`]: `\x` becomes `x` for any `x`.
///
/// A trailing lone backslash has nothing to escape and is kept.
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == ESCAPE {
            out.push(chars.next().unwrap_or(ESCAPE));
        } else {
            out.push(ch);
        }
    }
    out
}

/// Split a payload body on `;`, treating `\;` as part of the field.
///
/// Escape sequences are left in place; callers unescape field values.
pub(crate) fn split_escape_aware(body: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (idx, ch) in body.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == ESCAPE {
            escaped = true;
        } else if ch == ';' {
            fields.push(&body[start..idx]);
            start = idx + ch.len_utf8();
        }
    }
    fields.push(&body[start..]);
    fields
}
