//! Default display names for token files.

use std::path::Path;

/// Derive a display name from a token file path.
///
/// The extension is dropped, underscores and hyphens become spaces, and
/// each word is capitalised: `ORC-grunt.svg` becomes `Orc Grunt`.
pub fn default_display_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    title_case(&stem.replace(['_', '-'], " "))
}

/// Capitalise the first letter of every run of letters and lower-case the rest.
///
/// Any non-alphabetic character (space, digit, punctuation) starts a new word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// The final path component as a string, lossily converted.
pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_display_name() {
        assert_eq!(
            default_display_name(Path::new("Goblin_Warrior.png")),
            "Goblin Warrior"
        );
        assert_eq!(default_display_name(Path::new("ORC-grunt.svg")), "Orc Grunt");
        assert_eq!(
            default_display_name(Path::new("tokens/dire_wolf-alpha.jpeg")),
            "Dire Wolf Alpha"
        );
    }

    #[test]
    fn test_default_display_name_keeps_inner_dots() {
        assert_eq!(default_display_name(Path::new("v1.2_boss.png")), "V1.2 Boss");
    }

    #[test]
    fn test_title_case_digits_split_words() {
        assert_eq!(title_case("goblin2warrior"), "Goblin2Warrior");
        assert_eq!(title_case("  two  spaces"), "  Two  Spaces");
    }

    #[test]
    fn test_file_name_string() {
        assert_eq!(file_name_string(Path::new("pack/tokens/orc.svg")), "orc.svg");
        assert_eq!(file_name_string(Path::new("/")), "");
    }
}
