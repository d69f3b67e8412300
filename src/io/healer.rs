//! Repairs for common feed well-formedness errors

use std::borrow::Cow;

use tracing::trace;

/// Entities XML defines itself
const XML_ENTITIES: [&str; 5] = ["amp", "lt", "gt", "quot", "apos"];

/// HTML entities that show up in feeds, with their code points
const HTML_ENTITIES: &[(&str, u32)] = &[
    ("nbsp", 160),
    ("iexcl", 161),
    ("cent", 162),
    ("pound", 163),
    ("yen", 165),
    ("sect", 167),
    ("copy", 169),
    ("laquo", 171),
    ("reg", 174),
    ("deg", 176),
    ("para", 182),
    ("middot", 183),
    ("raquo", 187),
    ("frac12", 189),
    ("agrave", 224),
    ("aacute", 225),
    ("auml", 228),
    ("ccedil", 231),
    ("egrave", 232),
    ("eacute", 233),
    ("ouml", 246),
    ("uuml", 252),
    ("szlig", 223),
    ("times", 215),
    ("ndash", 8211),
    ("mdash", 8212),
    ("lsquo", 8216),
    ("rsquo", 8217),
    ("ldquo", 8220),
    ("rdquo", 8221),
    ("bull", 8226),
    ("hellip", 8230),
    ("euro", 8364),
    ("trade", 8482),
];

/// Longest entity name considered when scanning for `;`
const MAX_ENTITY_LEN: usize = 10;

const CDATA_START: &str = "<![CDATA[";
const CDATA_END: &str = "]]>";

/// Replace HTML entities with numeric references and escape stray `&`
///
/// CDATA sections are copied unchanged. Input without `&` is returned
/// borrowed.
///
/// # Examples
///
/// ```
/// use synd_rs::io::heal;
///
/// assert_eq!(heal("<t>A&nbsp;B</t>"), "<t>A&#160;B</t>");
/// assert_eq!(heal("<t>Q&A</t>"), "<t>Q&amp;A</t>");
/// assert_eq!(heal("<t>&amp; &#38;</t>"), "<t>&amp; &#38;</t>");
/// ```
pub fn heal(xml: &str) -> Cow<'_, str> {
    if !xml.contains('&') {
        return Cow::Borrowed(xml);
    }

    let mut out = String::with_capacity(xml.len());
    let mut rest = xml;
    let mut fixes = 0usize;

    while let Some(pos) = rest.find(['&', '<']) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if rest.starts_with(CDATA_START) {
            let end = rest
                .find(CDATA_END)
                .map_or(rest.len(), |e| e + CDATA_END.len());
            out.push_str(&rest[..end]);
            rest = &rest[end..];
            continue;
        }
        if rest.starts_with('<') {
            out.push('<');
            rest = &rest[1..];
            continue;
        }

        // rest starts with '&'
        let name = entity_name(&rest[1..]);
        match name {
            Some(name) if is_valid_reference(name) => {
                out.push('&');
                out.push_str(name);
                out.push(';');
            }
            Some(name) => match html_code_point(name) {
                Some(code) => {
                    out.push_str(&format!("&#{};", code));
                    fixes += 1;
                }
                None => {
                    out.push_str("&amp;");
                    out.push_str(name);
                    out.push(';');
                    fixes += 1;
                }
            },
            None => {
                out.push_str("&amp;");
                fixes += 1;
                rest = &rest[1..];
                continue;
            }
        }
        // '&' + name + ';'
        let consumed = name.map_or(1, |n| n.len() + 2);
        rest = &rest[consumed..];
    }
    out.push_str(rest);

    if fixes > 0 {
        trace!("Healed {} entity references", fixes);
    }
    Cow::Owned(out)
}

/// Name between `&` and `;`, if the text looks like a reference
fn entity_name(text: &str) -> Option<&str> {
    let end = text.find(';')?;
    let name = &text[..end];
    let plausible = !name.is_empty()
        && name.len() <= MAX_ENTITY_LEN
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '#');
    plausible.then_some(name)
}

fn is_valid_reference(name: &str) -> bool {
    if XML_ENTITIES.contains(&name) {
        return true;
    }
    match name.strip_prefix('#') {
        Some(hex) if hex.starts_with(['x', 'X']) => {
            hex.len() > 1 && hex[1..].chars().all(|c| c.is_ascii_hexdigit())
        }
        Some(decimal) => !decimal.is_empty() && decimal.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

fn html_code_point(name: &str) -> Option<u32> {
    HTML_ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, code)| *code)
}
