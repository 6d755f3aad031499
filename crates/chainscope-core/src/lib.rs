//! Chainscope Core - supported-chains listing toolkit
//!
//! This is the single source of truth for the chain-listing semantics.
//! The CLI and any future display surface build on this same core.
//!
//! # Architecture
//!
//! ```text
//! chain document (JSON) → ChainList → per-chain transforms
//!                                        ↓
//!                                     icon::resolve → IconIdentifier → icon URL
//!                                        ↓
//!                                     format::to_enum_format / to_display_name
//!                                        ↓
//!                                     capability grouping → counts + filtered lists
//! ```
//!
//! # Guarantees
//!
//! - **Total**: every chain name resolves to exactly one icon identifier;
//!   no input panics or errors
//! - **Deterministic**: same input always produces identical output
//! - **Pure**: no network or filesystem access anywhere in this crate

pub mod capability;
pub mod error;
pub mod format;
pub mod icon;

pub use capability::Capability;
pub use error::{Error, Result};
pub use icon::IconIdentifier;

/// The chain document returned by the upstream listing API
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChainList {
    pub chains: Vec<Chain>,
}

/// A single blockchain network entry
///
/// Capability blocks are optional in the upstream document; an absent
/// block means the capability is not supported for that chain.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Chain {
    pub name: String,
    pub chain_id: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balances: Option<CapabilitySupport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<CapabilitySupport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collectibles: Option<CapabilitySupport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<CapabilitySupport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_info: Option<CapabilitySupport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_holders: Option<CapabilitySupport>,
}

/// Per-capability support flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CapabilitySupport {
    pub supported: bool,
}

impl ChainList {
    /// Parse a chain document from JSON text
    ///
    /// Unknown fields are tolerated so the upstream API can add
    /// capabilities without breaking older clients.
    ///
    /// # Errors
    /// Returns `Error::Json` if the text is not a valid chain document.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl Chain {
    /// Canonical icon identifier for this chain
    pub fn icon(&self) -> IconIdentifier {
        icon::resolve(&self.name)
    }

    /// Full URL of the branded SVG icon for this chain
    pub fn icon_url(&self) -> String {
        self.icon().url()
    }

    /// PascalCase enum token for this chain, e.g. `OpMainnet`
    pub fn enum_token(&self) -> String {
        format::to_enum_format(&self.name)
    }

    /// Human-readable display label, e.g. `Op Mainnet`
    pub fn display_name(&self) -> String {
        format::to_display_name(&self.enum_token())
    }
}
