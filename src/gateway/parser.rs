//! Output cleanup for raw model completions

/// Boilerplate markers some models prepend to their answer
pub const BOILERPLATE_PREFIXES: [&str; 3] = ["AI response:", "chat response:", "bot response:"];

/// Strip leading boilerplate markers and surrounding whitespace
///
/// Markers are matched case-sensitively and only at the start of the text.
/// Stacked markers ("AI response: bot response: ...") are all removed.
/// `clean(clean(s)) == clean(s)` for every input.
pub fn clean(raw: &str) -> String {
    let mut text = raw.trim();

    while let Some(rest) = BOILERPLATE_PREFIXES
        .iter()
        .find_map(|prefix| text.strip_prefix(prefix))
    {
        text = rest.trim();
    }

    text.to_string()
}
