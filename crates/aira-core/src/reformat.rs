//! Post-processing of model output so list items land on their own lines.
//!
//! Three passes run in order over the text:
//!
//! 1. numbered markers (`1)` or `1.`, with any surrounding whitespace) become
//!    `"\n1) "` / `"\n1. "`;
//! 2. hyphen markers (`-` with any surrounding whitespace) become `"\n- "`;
//! 3. runs of `\n` collapse to a single `\n`.
//!
//! The result is trimmed. The hyphen pass may consume the line break the first
//! pass inserted, so the collapse has to come last.

/// Force numbered and hyphenated list items onto separate lines.
pub fn reformat(text: &str) -> String {
    let numbered = break_numbered_markers(text);
    let hyphenated = break_hyphen_markers(&numbered);
    collapse_newlines(&hyphenated).trim().to_string()
}

fn skip_whitespace(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    i
}

fn break_numbered_markers(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 16);
    let mut i = 0;

    while i < chars.len() {
        let digits_start = skip_whitespace(&chars, i);
        let mut digits_end = digits_start;
        while digits_end < chars.len() && chars[digits_end].is_ascii_digit() {
            digits_end += 1;
        }

        let is_marker = digits_end > digits_start
            && matches!(chars.get(digits_end), Some(')') | Some('.'));

        if is_marker {
            out.push('\n');
            out.extend(&chars[digits_start..=digits_end]);
            out.push(' ');
            i = skip_whitespace(&chars, digits_end + 1);
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

fn break_hyphen_markers(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 16);
    let mut i = 0;

    while i < chars.len() {
        let dash = skip_whitespace(&chars, i);
        if chars.get(dash) == Some(&'-') {
            out.push_str("\n- ");
            i = skip_whitespace(&chars, dash + 1);
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

fn collapse_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\n' && out.ends_with('\n') {
            continue;
        }
        out.push(c);
    }
    out
}
