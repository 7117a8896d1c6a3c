//! Reading text back out of rendered HTML.

/// Decodes the character references askama's HTML escaper emits
/// (`&#38;`, `&#39;`, `&quot;`, ...), numeric references, and the common
/// named ones. Unknown references are left as written.
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];

        let decoded = candidate
            .find(';')
            .filter(|&end| end <= 10)
            .and_then(|end| decode_reference(&candidate[1..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &candidate[end + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_reference(reference: &str) -> Option<char> {
    if let Some(number) = reference.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        };
        return char::from_u32(code);
    }

    match reference {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}

/// Inner text of every `<open ...>text</close>` span, in document order.
///
/// `open` is the full opening tag including attributes, e.g.
/// `<summary class="faq-item__question">`. Nested markup inside the span is
/// kept verbatim.
pub fn spans_between<'h>(html: &'h str, open: &str, close: &str) -> Vec<&'h str> {
    html.split(open)
        .skip(1)
        .filter_map(|rest| rest.find(close).map(|end| &rest[..end]))
        .collect()
}
