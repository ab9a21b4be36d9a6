//! XML text escaping for values inserted into the KML document.
//!
//! Field values come straight from recorded rows and may contain anything.
//! Every insertion point goes through one of these helpers so the emitted
//! document stays well-formed.

/// Returns `true` for characters that XML 1.0 allows in character data.
///
/// Control characters below 0x20 are forbidden except tab, newline and
/// carriage return. The noncharacters U+FFFE and U+FFFF are forbidden too.
fn is_xml_char(c: char) -> bool {
    match c as u32 {
        0x09 | 0x0A | 0x0D => true,
        0xFFFE | 0xFFFF => false,
        code => code >= 0x20,
    }
}

/// Escapes `&`, `<` and `>` for use inside an element body.
///
/// Characters XML cannot represent are dropped.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars().filter(|c| is_xml_char(*c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a value for use inside a double-quoted attribute.
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Returns `true` when the value is empty or only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
