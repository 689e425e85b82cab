//! Named-color table for part display metadata.
//!
//! A fixed, non-extensible inventory of named colors. Resolution is
//! case-insensitive; strings that are not in the table (raw hex values in
//! particular) pass through unchanged so producers can use arbitrary colors
//! without registering them here.

/// Named colors and their hex values, lowercase names.
pub const COLORS: &[(&str, &str)] = &[
    ("blue", "#4a90d9"),
    ("red", "#e85454"),
    ("green", "#50e850"),
    ("yellow", "#e8b024"),
    ("orange", "#e87824"),
    ("purple", "#b024e8"),
    ("cyan", "#24e8b0"),
    ("pink", "#e824b0"),
    ("gray", "#888888"),
    ("white", "#ffffff"),
    ("black", "#333333"),
];

/// Resolve an optional color string to its hex value.
///
/// Known names match case-insensitively; unknown strings pass through
/// unchanged; `None` stays `None`.
pub fn resolve(color: Option<&str>) -> Option<String> {
    let color = color?;
    let resolved = COLORS
        .iter()
        .copied()
        .find(|(name, _)| name.eq_ignore_ascii_case(color))
        .map_or(color, |(_, hex)| hex);
    Some(resolved.to_string())
}
