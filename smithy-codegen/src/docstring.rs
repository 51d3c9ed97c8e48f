/*!
A small HTML-to-Markdown sub-emitter (spec.md §4.5 "Docstring handling"). Smithy
`documentation` trait values are CommonMark with a handful of inline HTML tags allowed
through; no crate in this workspace's dependency pack offers an HTML-to-Markdown
conversion, so this handles exactly the subset real Smithy models use and nothing more.
*/

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Convert a `documentation` trait value to Markdown suitable for a doc comment or a
/// Readme paragraph.
pub fn html_to_markdown(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut hrefs: Vec<String> = Vec::new();
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = match after.find('>') {
            Some(offset) => offset,
            None => {
                out.push('<');
                rest = after;
                continue;
            }
        };
        let tag = &after[..end];
        out.push_str(&render_tag(tag, &mut hrefs));
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    out.trim().to_string()
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn render_tag(tag: &str, hrefs: &mut Vec<String>) -> String {
    let (closing, name) = match tag.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, tag),
    };
    let name = name.split_whitespace().next().unwrap_or(name).to_lowercase();

    match name.as_str() {
        "p" | "br" => "\n\n".to_string(),
        "b" | "strong" => "**".to_string(),
        "i" | "em" => "_".to_string(),
        "code" => "`".to_string(),
        "ul" | "ol" => String::new(),
        "li" => {
            if closing {
                "\n".to_string()
            } else {
                "- ".to_string()
            }
        }
        "a" => {
            if closing {
                match hrefs.pop() {
                    Some(href) => format!("]({})", href),
                    None => String::new(),
                }
            } else {
                hrefs.push(extract_attr(tag, "href"));
                "[".to_string()
            }
        }
        _ => String::new(),
    }
}

fn extract_attr(tag: &str, attr: &str) -> String {
    let needle = format!("{}=\"", attr);
    tag.find(&needle)
        .map(|start| {
            let rest = &tag[start + needle.len()..];
            match rest.find('"') {
                Some(end) => &rest[..end],
                None => "",
            }
        })
        .unwrap_or("")
        .to_string()
}
