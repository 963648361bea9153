use super::*;

// =============================================================================
// contract types
// =============================================================================

#[test]
fn every_bundle_carries_a_contract_type() {
    for bundle in [
        particulier_without_zeno(),
        interne_urmet(),
        installateur_premium_with_site(),
        installateur_non_premium_sans_site(),
        promoteur_be(),
    ] {
        assert!(bundle.contract_type().is_some());
    }
}

#[test]
fn contract_types_are_distinct_per_segment() {
    let mut seen = std::collections::HashSet::new();
    for bundle in [
        particulier_without_zeno(),
        interne_urmet(),
        installateur_premium_with_site(),
        installateur_non_premium_sans_site(),
        promoteur_be(),
    ] {
        assert!(seen.insert(bundle.contract_type().unwrap().to_owned()));
    }
}

// =============================================================================
// content shape
// =============================================================================

#[test]
fn default_bundle_has_dashboard_sections() {
    let b = particulier_without_zeno();
    assert!(b.content.get("Services").is_some());
    assert!(b.content.get("FeedData").is_some());
    assert!(b.content.get("OrdersHeadings").is_some());
}

#[test]
fn premium_bundle_has_premium_sections() {
    let b = installateur_premium_with_site();
    assert!(b.content.get("PremiumContractInfo").is_some());
    assert!(b.content.get("ConsumptionSiteInfo").is_some());
    assert!(b.content.get("ModemAlerts").is_some());
    assert!(b.content.get("PremiumOffers").is_some());
}

#[test]
fn builders_return_fresh_equal_bundles() {
    // No hidden shared state between calls.
    assert_eq!(interne_urmet(), interne_urmet());
}

// =============================================================================
// serde shape
// =============================================================================

#[test]
fn bundle_serializes_with_flattened_content() {
    let json = serde_json::to_value(particulier_without_zeno()).unwrap();
    assert_eq!(json["userInfo"]["contractType"], "particulier");
    // Content fields sit at the top level, as the components expect.
    assert!(json["Services"].is_array());
}
