//! Data-resolution capability: segment tag -> dashboard data bundle.
//!
//! DESIGN
//! ======
//! Resolution is a pure mapping dispatched through an exhaustive `match`
//! over [`UserType`], so an unmapped segment is a compile error rather than
//! a runtime string lookup. The fallback rule for *unknown tag strings*
//! (fail open to the default segment, never leave a user with no bundle)
//! lives at the controller's tag entry point, not here.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::services::catalog;
use crate::user_type::UserType;

const RESOLVE_LATENCY: Duration = Duration::from_millis(200);

/// The slice of a bundle the core inspects: the contract classification
/// merged into the identity after each load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleUserInfo {
    #[serde(rename = "contractType", skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
}

/// Segment-specific dashboard data. `content` is opaque to the core and
/// consumed field-by-field by presentational components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataBundle {
    #[serde(rename = "userInfo", skip_serializing_if = "Option::is_none")]
    pub user_info: Option<BundleUserInfo>,
    #[serde(flatten)]
    pub content: serde_json::Value,
}

impl DataBundle {
    /// Contract type carried by this bundle, if any.
    #[must_use]
    pub fn contract_type(&self) -> Option<&str> {
        self.user_info
            .as_ref()
            .and_then(|info| info.contract_type.as_deref())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("bundle fetch failed for {user_type}: {reason}")]
    FetchFailed { user_type: UserType, reason: String },
}

/// Capability that maps a segment to its data bundle. Pure: no side
/// effects beyond the fetch, idempotent per segment, callable regardless of
/// authentication state.
#[async_trait]
pub trait DataResolver: Send + Sync {
    async fn resolve(&self, user_type: UserType) -> Result<DataBundle, ResolveError>;
}

/// Resolver backed by the static per-segment catalog.
#[derive(Debug)]
pub struct CatalogResolver {
    latency: Duration,
}

impl CatalogResolver {
    #[must_use]
    pub fn new() -> Self {
        Self { latency: RESOLVE_LATENCY }
    }

    /// Zero-latency resolver for tests.
    #[must_use]
    pub fn instant() -> Self {
        Self { latency: Duration::ZERO }
    }
}

impl Default for CatalogResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataResolver for CatalogResolver {
    async fn resolve(&self, user_type: UserType) -> Result<DataBundle, ResolveError> {
        tokio::time::sleep(self.latency).await;

        let bundle = match user_type {
            UserType::ParticulierWithoutZeno => catalog::particulier_without_zeno(),
            UserType::InterneUrmet => catalog::interne_urmet(),
            UserType::InstallateurPremiumWithSite => catalog::installateur_premium_with_site(),
            UserType::InstallateurNonPremiumSansSite => catalog::installateur_non_premium_sans_site(),
            UserType::PromoteurBe => catalog::promoteur_be(),
        };
        Ok(bundle)
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
