//! Chain icon resolution — maps chain names to branded icon identifiers
//!
//! The resolver converts a free-form chain name from the listing API into
//! the canonical lowercase hyphenated key used by the icon asset repository.
//!
//! # Pipeline
//!
//! `name → lowercase/trim → tokenize → alias table → sepolia rule → suffix strip → identifier`
//!
//! # Guarantees
//!
//! - **Total**: every input maps to exactly one non-empty identifier;
//!   empty or fully-stripped names fall back to `"ethereum"`
//! - **Deterministic**: same input always produces same output
//! - **Pure**: no I/O; whether the identifier names an existing asset is
//!   the renderer's problem (a missing asset just 404s)

use std::fmt;

/// Base URL of the branded network icon assets
pub const ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/0xa3k5/web3icons/refs/heads/main/raw-svgs/networks/branded";

/// Identifier used when a name is empty or strips down to nothing
pub const DEFAULT_ICON: &str = "ethereum";

// ── Rule tables ────────────────────────────────────────────
//
// Evaluated top to bottom, first match wins. Adding a chain means adding
// a row here, not touching the control flow below.

/// Exact-match overrides for chains whose icon key cannot be derived
/// from the name. Keys are the lowercased, trimmed name.
const ALIASES: &[(&str, &str)] = &[
    ("arbitrum", "arbitrum-one"),
    // No dedicated shape asset exists yet; stand in with the ethereum mark
    // until one lands upstream.
    ("shape", "ethereum"),
];

/// Environment words dropped from names before hyphenation.
/// Matched against whole words only, so compound names survive.
const ENV_WORDS: &[&str] = &["mainnet", "testnet", "devnet", "sepolia"];

// ── Public API ─────────────────────────────────────────────

/// Canonical icon-asset key for a chain
///
/// Lowercase, hyphen-separated, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconIdentifier(String);

impl IconIdentifier {
    /// The identifier as a plain string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full URL of the branded SVG asset for this identifier
    pub fn url(&self) -> String {
        format!("{}/{}.svg", ICON_BASE_URL, self.0)
    }

    fn of(key: &str) -> Self {
        IconIdentifier(key.to_string())
    }
}

impl fmt::Display for IconIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve a chain name to its canonical icon identifier
///
/// # Guarantees
/// - Total: never panics, never errors; empty input yields the default
/// - Deterministic: same input always produces same output
pub fn resolve(name: &str) -> IconIdentifier {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return IconIdentifier::of(DEFAULT_ICON);
    }

    // Alias table beats every general rule
    for (alias, key) in ALIASES {
        if normalized == *alias {
            return IconIdentifier::of(key);
        }
    }

    let words = tokenize(&normalized);
    let tokenized = words.join(" ");

    // Testnet variants reuse the parent network's brand icon
    if tokenized.contains("sepolia") {
        if tokenized.contains("base") {
            return IconIdentifier::of("base");
        }
        return IconIdentifier::of(DEFAULT_ICON);
    }

    // Drop environment suffix words, hyphenate whatever remains
    let kept: Vec<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|word| !ENV_WORDS.contains(word))
        .collect();

    if kept.is_empty() {
        return IconIdentifier::of(DEFAULT_ICON);
    }
    IconIdentifier(kept.join("-"))
}

/// Full branded icon URL for a chain name
pub fn icon_url(name: &str) -> String {
    resolve(name).url()
}

// ── Helpers ────────────────────────────────────────────────

/// Split a lowercased name into words: parentheses become separators,
/// runs of whitespace, underscores and hyphens collapse away.
fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split(|c: char| c.is_whitespace() || matches!(c, '_' | '-' | '(' | ')'))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Empty and degenerate input ─────────────────────

    #[test]
    fn test_empty_input_falls_back_to_default() {
        assert_eq!(resolve("").as_str(), "ethereum");
        assert_eq!(resolve("   ").as_str(), "ethereum");
        assert_eq!(resolve("\t\n").as_str(), "ethereum");
    }

    #[test]
    fn test_suffix_only_input_falls_back_to_default() {
        // Everything strips away, so the default applies
        assert_eq!(resolve("mainnet").as_str(), "ethereum");
        assert_eq!(resolve("testnet devnet").as_str(), "ethereum");
        assert_eq!(resolve("---").as_str(), "ethereum");
    }

    // ── Alias table ────────────────────────────────────

    #[test]
    fn test_arbitrum_alias() {
        assert_eq!(resolve("Arbitrum").as_str(), "arbitrum-one");
        assert_eq!(resolve("arbitrum").as_str(), "arbitrum-one");
        assert_eq!(resolve("  ARBITRUM  ").as_str(), "arbitrum-one");
    }

    #[test]
    fn test_shape_stand_in_alias() {
        assert_eq!(resolve("Shape").as_str(), "ethereum");
    }

    #[test]
    fn test_alias_requires_exact_match() {
        // "Arbitrum Nova" is not the aliased "arbitrum"
        assert_eq!(resolve("Arbitrum Nova").as_str(), "arbitrum-nova");
    }

    // ── Sepolia rule ───────────────────────────────────

    #[test]
    fn test_base_sepolia_uses_base_icon() {
        assert_eq!(resolve("Base Sepolia").as_str(), "base");
        assert_eq!(resolve("base_sepolia").as_str(), "base");
    }

    #[test]
    fn test_other_sepolia_variants_use_ethereum_icon() {
        assert_eq!(resolve("Ethereum Sepolia").as_str(), "ethereum");
        assert_eq!(resolve("Sepolia").as_str(), "ethereum");
        assert_eq!(resolve("Optimism Sepolia").as_str(), "ethereum");
        assert_eq!(resolve("arbitrum-sepolia").as_str(), "ethereum");
    }

    // ── Suffix stripping ───────────────────────────────

    #[test]
    fn test_environment_suffixes_are_dropped() {
        assert_eq!(resolve("Polygon Mainnet").as_str(), "polygon");
        assert_eq!(resolve("op_mainnet").as_str(), "op");
        assert_eq!(resolve("Solana Devnet").as_str(), "solana");
        assert_eq!(resolve("Monad Testnet").as_str(), "monad");
    }

    #[test]
    fn test_suffix_matching_is_word_bounded() {
        // "mainnetx" is not the word "mainnet"
        assert_eq!(resolve("mainnetx").as_str(), "mainnetx");
    }

    #[test]
    fn test_separators_and_parentheses_collapse() {
        assert_eq!(resolve("zk sync era").as_str(), "zk-sync-era");
        assert_eq!(resolve("zk__sync--era").as_str(), "zk-sync-era");
        assert_eq!(resolve("Base (testnet)").as_str(), "base");
        assert_eq!(resolve("World Chain").as_str(), "world-chain");
    }

    #[test]
    fn test_plain_names_pass_through_lowercased() {
        assert_eq!(resolve("Ethereum").as_str(), "ethereum");
        assert_eq!(resolve("Base").as_str(), "base");
        assert_eq!(resolve("avalanche").as_str(), "avalanche");
    }

    // ── URL building ───────────────────────────────────

    #[test]
    fn test_icon_url_joins_base_and_identifier() {
        assert_eq!(
            icon_url("Polygon Mainnet"),
            format!("{}/polygon.svg", ICON_BASE_URL)
        );
        assert_eq!(
            icon_url("Arbitrum"),
            format!("{}/arbitrum-one.svg", ICON_BASE_URL)
        );
    }

    // ── Determinism ────────────────────────────────────

    #[test]
    fn test_determinism_100_iterations() {
        let names = ["Ethereum Mainnet", "Base Sepolia", "op_mainnet", "Shape"];
        for name in names {
            let first = resolve(name);
            for i in 0..100 {
                assert_eq!(first, resolve(name), "non-determinism at iteration {}", i);
            }
        }
    }
}
