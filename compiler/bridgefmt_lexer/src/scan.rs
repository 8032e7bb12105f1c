//! Hand-written scanners for tokens regular expressions cannot express.
//!
//! Block comments nest, and string literals may contain `\( ... )`
//! interpolations that themselves contain parentheses and string literals.
//! Both are scanned byte-wise: every delimiter involved is ASCII, so the
//! returned lengths always fall on `char` boundaries.

/// Length of a block comment body that follows an opening `/*`, including
/// the closing `*/`.
///
/// Unterminated comments run to the end of the input.
pub(crate) fn block_comment_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'/', Some(b'*')) => {
                depth += 1;
                i += 2;
            }
            (b'*', Some(b'/')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    return i;
                }
            }
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Length of a string literal body that follows an opening `"`, including
/// the closing delimiter.
///
/// A body starting with `""` is a multi-line `"""` literal. Returns `None`
/// when the literal is unterminated, or when a single-line literal hits a
/// line break.
pub(crate) fn string_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if bytes.starts_with(b"\"\"") {
        scan_quoted(bytes, 2, true)
    } else {
        scan_quoted(bytes, 0, false)
    }
}

/// Scan a literal body starting at `i`; returns the index just past the
/// closing quote(s).
fn scan_quoted(bytes: &[u8], mut i: usize, multiline: bool) -> Option<usize> {
    loop {
        match *bytes.get(i)? {
            b'\\' => {
                if bytes.get(i + 1) == Some(&b'(') {
                    i = scan_interpolation(bytes, i + 2)?;
                } else {
                    i += 2;
                }
            }
            b'"' if !multiline => return Some(i + 1),
            b'"' if bytes[i..].starts_with(b"\"\"\"") => return Some(i + 3),
            b'\n' | b'\r' if !multiline => return None,
            _ => i += 1,
        }
    }
}

/// Scan an interpolation whose `\(` ended just before `i`; returns the
/// index just past the matching `)`.
fn scan_interpolation(bytes: &[u8], mut i: usize) -> Option<usize> {
    let mut depth = 1usize;
    loop {
        match *bytes.get(i)? {
            b'(' => {
                depth += 1;
                i += 1;
            }
            b')' => {
                depth -= 1;
                i += 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            b'"' => {
                let body = i + 1;
                i = if bytes[body..].starts_with(b"\"\"") {
                    scan_quoted(bytes, body + 2, true)?
                } else {
                    scan_quoted(bytes, body, false)?
                };
            }
            _ => i += 1,
        }
    }
}
