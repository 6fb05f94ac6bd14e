// crates/linescrub-core/src/entities.rs
//
// HTML character reference decoding, text-content rules:
// - numeric refs (&#65; &#x41;) with or without ';'
// - 0x80..=0x9F remapped through Windows-1252
// - NUL, surrogates and values above U+10FFFF become U+FFFD
// - named refs with ';' from the full HTML5 table
// - legacy names may omit ';' and may prefix other text (&ampx -> &x)
// Anything unrecognised is copied through untouched.

/// Longest name in `LEGACY_NAMES`.
const LONGEST_LEGACY: usize = 6;

/// Names that HTML accepts without a trailing ';'.
const LEGACY_NAMES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave",
    "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren", "deg",
    "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34", "gt",
    "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash",
    "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy", "sup1",
    "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml",
    "yacute", "yen", "yuml",
];

const WINDOWS_1252: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

/// Decode every character reference in `s`.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let b = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut copied = 0usize;
    let mut i = 0usize;
    while i < b.len() {
        if b[i] != b'&' {
            i += 1;
            continue;
        }
        let decoded = if b.get(i + 1) == Some(&b'#') {
            numeric_ref(s, i)
        } else {
            named_ref(s, i)
        };
        match decoded {
            Some((text, next)) => {
                out.push_str(&s[copied..i]);
                out.push_str(&text);
                copied = next;
                i = next;
            }
            None => i += 1,
        }
    }
    out.push_str(&s[copied..]);
    out
}

/// `&#...` at `at`. Returns the replacement and the index after the reference.
fn numeric_ref(s: &str, at: usize) -> Option<(String, usize)> {
    let b = s.as_bytes();
    let mut i = at + 2;
    let hex = matches!(b.get(i), Some(b'x') | Some(b'X'));
    if hex {
        i += 1;
    }
    let radix = if hex { 16 } else { 10 };

    let digits_start = i;
    let mut value: u32 = 0;
    while let Some(d) = b.get(i).and_then(|&c| (c as char).to_digit(radix)) {
        // Saturate past the Unicode range; the exact value no longer matters.
        value = value.saturating_mul(radix).saturating_add(d).min(0x11_0000);
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    if b.get(i) == Some(&b';') {
        i += 1;
    }

    let ch = match value {
        0x80..=0x9F => WINDOWS_1252[(value - 0x80) as usize],
        0 => '\u{FFFD}',
        v => char::from_u32(v).unwrap_or('\u{FFFD}'),
    };
    Some((ch.to_string(), i))
}

/// `&name` at `at`, with an optional ';'.
fn named_ref(s: &str, at: usize) -> Option<(String, usize)> {
    let b = s.as_bytes();
    let start = at + 1;
    let mut end = start;
    while end < b.len() && b[end].is_ascii_alphanumeric() {
        end += 1;
    }
    if end == start {
        return None;
    }
    let name = &s[start..end];
    let has_semi = b.get(end) == Some(&b';');

    if has_semi {
        if let Some(text) = lookup(name) {
            return Some((text, end + 1));
        }
    } else if LEGACY_NAMES.contains(&name) {
        if let Some(text) = lookup(name) {
            return Some((text, end));
        }
    }

    // Longest legacy name that is a strict prefix of the run ("&ampx" -> "&" + "x").
    let run_len = name.len() + usize::from(has_semi);
    let max = (run_len - 1).min(LONGEST_LEGACY).min(name.len());
    (2..=max).rev().find_map(|j| {
        let prefix = &name[..j];
        if LEGACY_NAMES.contains(&prefix) {
            lookup(prefix).map(|text| (text, start + j))
        } else {
            None
        }
    })
}

/// Resolve a named reference through the HTML5 table.
fn lookup(name: &str) -> Option<String> {
    let reference = format!("&{name};");
    let decoded = html_escape::decode_html_entities(&reference);
    if decoded == reference.as_str() {
        None
    } else {
        Some(decoded.into_owned())
    }
}
