//! Artifact naming.

/// File extension for plotter programs.
pub const ARTIFACT_EXTENSION: &str = "gcode";

/// Maximum length of a sanitized file stem.
const MAX_STEM_LEN: usize = 64;

/// Maps a label to a filesystem-safe artifact stem.
///
/// ASCII alphanumerics, `-`, and `_` pass through; every other character
/// becomes `_`. The stem is capped at 64 characters, and a label that
/// sanitizes to nothing becomes `label`. Collisions between distinct labels
/// are resolved by the batch runner, which appends `-2`, `-3` suffixes.
pub fn artifact_name(label: &str) -> String {
    let mut stem: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_STEM_LEN)
        .collect();

    if stem.is_empty() {
        stem.push_str("label");
    }
    stem
}
