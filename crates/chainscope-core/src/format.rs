//! Name formatting — chain names to enum tokens and display labels
//!
//! Two independent text transforms with no shared state:
//!
//! - [`to_enum_format`]: `"op_mainnet"` → `"OpMainnet"` (PascalCase token
//!   matching the SDK enum member for the chain)
//! - [`to_display_name`]: `"OpMainnet"` → `"Op Mainnet"` (re-insert word
//!   boundaries for human-readable labels)
//!
//! For names made of letters and the separators (whitespace, `_`, `-`)
//! the pair round-trips: display recovers a space at exactly the
//! positions the enum transform capitalized.

/// Convert a chain name to its PascalCase enum token
///
/// Lowercases the input, splits on runs of whitespace, underscores and
/// hyphens, capitalizes each word, and concatenates.
pub fn to_enum_format(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

/// Convert a PascalCase enum token back to a display label
///
/// Inserts a space before each internal uppercase letter.
pub fn to_display_name(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 8);
    for (i, c) in token.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
