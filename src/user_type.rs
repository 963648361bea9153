//! Account segment tags.
//!
//! DESIGN
//! ======
//! Segments are a closed enum rather than free-form strings, so every tag
//! maps to exactly one catalog entry and the resolver's dispatch is an
//! exhaustive `match`. Tag strings on the wire stay in the portal's original
//! camel-case form.

use serde::{Deserialize, Serialize};

/// Account segment of a signed-in user. Decides which dashboard and data
/// bundle the portal shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    /// Individual customer without a Zeno contract. The portal's default
    /// segment.
    #[default]
    #[serde(rename = "particulierWithoutZeno")]
    ParticulierWithoutZeno,
    /// Internal Urmet support staff.
    #[serde(rename = "interneUrmet")]
    InterneUrmet,
    /// Premium installer with at least one registered consumption site.
    #[serde(rename = "InstallateurPremiumWithSite")]
    InstallateurPremiumWithSite,
    /// Non-premium installer without a registered site.
    #[serde(rename = "installateurNonPremiumSansSite")]
    InstallateurNonPremiumSansSite,
    /// Belgian property promoter.
    #[serde(rename = "promoteurBe")]
    PromoteurBe,
}

impl UserType {
    /// All known segments, in switcher display order.
    pub const ALL: [UserType; 5] = [
        UserType::ParticulierWithoutZeno,
        UserType::InterneUrmet,
        UserType::InstallateurPremiumWithSite,
        UserType::InstallateurNonPremiumSansSite,
        UserType::PromoteurBe,
    ];

    /// Wire tag for this segment.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            UserType::ParticulierWithoutZeno => "particulierWithoutZeno",
            UserType::InterneUrmet => "interneUrmet",
            UserType::InstallateurPremiumWithSite => "InstallateurPremiumWithSite",
            UserType::InstallateurNonPremiumSansSite => "installateurNonPremiumSansSite",
            UserType::PromoteurBe => "promoteurBe",
        }
    }

    /// Parse a wire tag. Returns `None` for unknown tags; callers decide
    /// whether that falls open to [`UserType::default`] (the controller's
    /// tag entry point does) or is an error.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_tag() == tag)
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
#[path = "user_type_test.rs"]
mod tests;
