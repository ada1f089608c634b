/// Characters that survive copy-paste from chat clients but are not part of
/// an id: zero-width space/joiners, word joiner, BOM, and no-break space.
const INVISIBLE: [char; 6] = [
    '\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}', '\u{00A0}',
];

/// Canonical cache key for a group id. Case is preserved.
pub fn normalize_group_id(group_id: &str) -> String {
    group_id
        .chars()
        .filter(|c| !INVISIBLE.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}
