//! Display-name helpers for contacts.

/// Capitalizes every word of a full name.
///
/// Leading and trailing whitespace is removed, words are separated by single
/// spaces, and each word keeps only its first letter upper-case.
///
/// # Examples
///
/// ```
/// use join_board::contact::domain::capitalize_full_name;
///
/// assert_eq!(capitalize_full_name("  aNNa   maria bell "), "Anna Maria Bell");
/// ```
#[must_use]
pub fn capitalize_full_name(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Extracts up to two upper-case initials from a full name.
///
/// # Examples
///
/// ```
/// use join_board::contact::domain::initials;
///
/// assert_eq!(initials("anna maria bell"), "AM");
/// assert_eq!(initials("Cher"), "C");
/// assert_eq!(initials("   "), "");
/// ```
#[must_use]
pub fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
