//! Static knowledge consulted by the domain validator and upgrade decision.
//!
//! This module contains the read-only data sets:
//! - Public suffix list and its matchers
//! - HTTPS upgrade table
//! - Local hosts allow-list

pub mod hosts;
pub mod suffix;
pub mod upgrade;

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::NavurlError;

pub use hosts::LocalHosts;
pub use suffix::{
    LabelBoundaryMatcher, PlainSuffixMatcher, PublicSuffixListMatcher, SuffixMatchMode,
    SuffixMatcher, SuffixSet,
};
pub use upgrade::HttpsUpgradeSet;

const BUNDLED_SUFFIXES: &str = include_str!("../../data/public_suffixes.json");
const BUNDLED_HTTPS_UPGRADE: &str = include_str!("../../data/https_upgrade.json");

static BUNDLED: Lazy<KnowledgeBase> = Lazy::new(|| {
    KnowledgeBase::from_json(BUNDLED_SUFFIXES, BUNDLED_HTTPS_UPGRADE).unwrap_or_else(|err| {
        tracing::error!("bundled knowledge data is unreadable, continuing without it: {}", err);
        KnowledgeBase::default()
    })
});

/// Suffix list plus HTTPS upgrade table, shared read-only.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub suffixes: Arc<SuffixSet>,
    pub https_upgrade: Arc<HttpsUpgradeSet>,
}

impl KnowledgeBase {
    pub fn new(suffixes: SuffixSet, https_upgrade: HttpsUpgradeSet) -> Self {
        Self {
            suffixes: Arc::new(suffixes),
            https_upgrade: Arc::new(https_upgrade),
        }
    }

    /// Decode both data sets from their JSON array form.
    pub fn from_json(suffixes: &str, https_upgrade: &str) -> Result<Self, NavurlError> {
        let suffixes = SuffixSet::from_json(suffixes)?;
        let https_upgrade = HttpsUpgradeSet::from_json(https_upgrade)?;
        tracing::debug!(
            suffixes = suffixes.len(),
            https_upgrade = https_upgrade.len(),
            "loaded knowledge base"
        );
        Ok(Self::new(suffixes, https_upgrade))
    }

    /// The data compiled into the crate, decoded on first use.
    pub fn bundled() -> Self {
        BUNDLED.clone()
    }
}
