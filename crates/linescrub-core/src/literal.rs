// crates/linescrub-core/src/literal.rs
//
// Double-quoted string literal codec.
//
// Grammar accepted by `unquote`:
// - text starts and ends with '"', and the closing quote is the last byte
// - no raw '\n', no unescaped '"' inside
// - escapes: \a \b \f \n \r \t \v \\ \"
// - \xHH and \OOO (three octal digits, <= 255) emit one raw byte
// - \uHHHH and \UHHHHHHHH emit a Unicode scalar value
// Everything else after a backslash is rejected, including \'.

use crate::error::UnquoteError;

type Result<T> = std::result::Result<T, UnquoteError>;

/// Escape every '"' and wrap the text in double quotes.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        if ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// Resolve the escapes of a double-quoted literal.
///
/// Raw bytes produced by `\x`/octal escapes that do not assemble into valid
/// UTF-8 come back as U+FFFD.
pub fn unquote(lit: &str) -> Result<String> {
    let b = lit.as_bytes();
    if b.len() < 2 || b[0] != b'"' || b[b.len() - 1] != b'"' {
        return Err(UnquoteError::NotQuoted);
    }

    let end = b.len() - 1;
    let mut out: Vec<u8> = Vec::with_capacity(end);
    let mut i = 1usize;
    while i < end {
        match b[i] {
            b'\n' => return Err(UnquoteError::Newline(i)),
            b'"' => return Err(UnquoteError::StrayQuote(i)),
            b'\\' => i = unescape_at(lit, i, end, &mut out)?,
            c => {
                // UTF-8 continuation bytes never collide with the ASCII
                // delimiters above, so multi-byte chars copy through bytewise.
                out.push(c);
                i += 1;
            }
        }
    }

    Ok(match String::from_utf8(out) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Decode the escape whose backslash sits at `at`; returns the index just
/// past it. `end` is the index of the closing quote.
fn unescape_at(lit: &str, at: usize, end: usize, out: &mut Vec<u8>) -> Result<usize> {
    let b = lit.as_bytes();
    if at + 1 >= end {
        return Err(UnquoteError::TruncatedEscape(at));
    }
    let c = b[at + 1];
    let mut i = at + 2;

    match c {
        b'a' => out.push(0x07),
        b'b' => out.push(0x08),
        b'f' => out.push(0x0c),
        b'n' => out.push(b'\n'),
        b'r' => out.push(b'\r'),
        b't' => out.push(b'\t'),
        b'v' => out.push(0x0b),
        b'\\' => out.push(b'\\'),
        b'"' => out.push(b'"'),
        b'x' | b'u' | b'U' => {
            let n = match c {
                b'x' => 2,
                b'u' => 4,
                _ => 8,
            };
            if i + n > end {
                return Err(UnquoteError::TruncatedEscape(at));
            }
            let mut v: u32 = 0;
            for &d in &b[i..i + n] {
                let x = (d as char).to_digit(16).ok_or(UnquoteError::InvalidEscape {
                    at,
                    ch: c as char,
                })?;
                v = (v << 4) | x;
            }
            i += n;

            if c == b'x' {
                out.push(v as u8);
            } else {
                let ch = char::from_u32(v).ok_or(UnquoteError::InvalidCodePoint { at, value: v })?;
                let mut buf = [0u8; 4];
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
        }
        b'0'..=b'7' => {
            if i + 2 > end {
                return Err(UnquoteError::TruncatedEscape(at));
            }
            let mut v = u32::from(c - b'0');
            for &d in &b[i..i + 2] {
                if !(b'0'..=b'7').contains(&d) {
                    return Err(UnquoteError::InvalidEscape { at, ch: c as char });
                }
                v = (v << 3) | u32::from(d - b'0');
            }
            i += 2;
            if v > 255 {
                return Err(UnquoteError::OctalOverflow { at, value: v });
            }
            out.push(v as u8);
        }
        _ => {
            let ch = lit[at + 1..].chars().next().unwrap_or('\u{FFFD}');
            return Err(UnquoteError::InvalidEscape { at, ch });
        }
    }

    Ok(i)
}
