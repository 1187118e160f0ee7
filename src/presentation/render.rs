use std::sync::LazyLock;

use regex::Regex;

static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*[•◦▪‣∙][ \t]*").unwrap());

/// Cosmetic rendering of generated text for on-screen display: lines led by
/// a unicode bullet marker become markdown list items. Purely additive on a
/// copy; the raw synthesizer output is what downloads ship, so this must
/// never be applied to the artifact value.
pub fn bullets_to_list(raw: &str) -> String {
    let mut rendered = raw
        .lines()
        .map(|line| match BULLET_MARKER.find(line) {
            Some(m) => format!("- {}", &line[m.end()..]),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n");

    if raw.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}
