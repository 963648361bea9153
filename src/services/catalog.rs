//! Static per-segment dashboard content.
//!
//! Each builder returns a fresh bundle, so repeated resolution never shares
//! or accumulates state. The section names mirror what the dashboard
//! components consume (feed, quote, orders/SAV tables, premium banners).

use serde_json::json;

use crate::services::resolver::{BundleUserInfo, DataBundle};

fn bundle(contract_type: &str, content: serde_json::Value) -> DataBundle {
    DataBundle {
        user_info: Some(BundleUserInfo { contract_type: Some(contract_type.to_owned()) }),
        content,
    }
}

/// Individual customer without a Zeno contract. The default dashboard.
pub(crate) fn particulier_without_zeno() -> DataBundle {
    bundle(
        "particulier",
        json!({
            "Services": [
                "Simuler mon projet",
                "Trouver un installateur",
                "Faire un retour SAV",
                "Service après-vente",
                "Explorer tous nos services",
            ],
            "QuoteData": {
                "reference": "DEV-2024-0117",
                "status": "En attente de validation",
                "amount": "1 240,00 €",
            },
            "FeedData": [
                { "title": "Nouvelle gamme d'interphones connectés", "date": "2024-05-02" },
                { "title": "Conseils d'entretien de votre installation", "date": "2024-04-18" },
            ],
            "ContactUsData": {
                "phone": "0 805 360 790",
                "hours": "Du lundi au vendredi, 8h-18h",
            },
            "OrdersHeadings": ["Commande", "Date", "Statut", "Montant"],
            "OrdersData": [
                ["CMD-88412", "2024-03-29", "Livrée", "312,50 €"],
            ],
            "SAVHeadings": ["Dossier", "Produit", "Statut"],
            "SAVData": [
                ["SAV-1041", "Visiophone V2", "En cours d'analyse"],
            ],
            "AccountTabData": ["Informations", "Adresses", "Préférences"],
        }),
    )
}

/// Internal Urmet support staff.
pub(crate) fn interne_urmet() -> DataBundle {
    bundle(
        "interne",
        json!({
            "Services": [
                "Consulter les dossiers clients",
                "Suivi des retours SAV",
                "Base de connaissances",
            ],
            "FeedData": [
                { "title": "Note interne: campagne de mise à jour modem", "date": "2024-05-06" },
            ],
            "ContactUsData": {
                "phone": "poste 4512",
                "hours": "Support interne, 7j/7",
            },
            "OrdersHeadings": ["Dossier", "Client", "Statut"],
            "OrdersData": [
                ["INT-2201", "Résidence Les Tilleuls", "Escaladé"],
            ],
        }),
    )
}

/// Premium installer with a registered consumption site.
pub(crate) fn installateur_premium_with_site() -> DataBundle {
    bundle(
        "premium",
        json!({
            "PremiumServices": [
                "Commander en direct",
                "Assistance prioritaire",
                "Suivi de chantier",
                "Formations certifiantes",
                "Explorer tous nos services",
            ],
            "PremiumContractInfo": {
                "contractNumber": "PRM-2023-4471",
                "expiryDate": "2025-01-31",
            },
            "ConsumptionSiteInfo": {
                "title": "Sites de consommation",
                "defaultSite": "Dépôt Lyon Sud",
                "sites": ["Dépôt Lyon Sud", "Agence Villeurbanne"],
            },
            "ModemAlerts": [
                { "site": "Agence Villeurbanne", "level": "warning", "message": "Modem hors ligne depuis 2 jours" },
            ],
            "PremiumOffers": [
                { "title": "Pack fibre chantier", "discount": "-15%" },
            ],
            "PremiumRequestHistory": [
                { "reference": "REQ-310", "date": "2024-04-22", "status": "Traitée" },
            ],
        }),
    )
}

/// Non-premium installer without a registered site.
pub(crate) fn installateur_non_premium_sans_site() -> DataBundle {
    bundle(
        "installateur",
        json!({
            "Services": [
                "Devenir installateur premium",
                "Catalogue produits",
                "Faire un retour SAV",
            ],
            "FeedData": [
                { "title": "Passez premium: avantages et conditions", "date": "2024-04-30" },
            ],
            "ContactUsData": {
                "phone": "0 805 360 790",
                "hours": "Du lundi au vendredi, 8h-18h",
            },
        }),
    )
}

/// Belgian property promoter.
pub(crate) fn promoteur_be() -> DataBundle {
    bundle(
        "promoteur",
        json!({
            "Services": [
                "Déposer un dossier programme",
                "Suivi de vos résidences",
                "Contacter votre chargé d'affaires",
            ],
            "FeedData": [
                { "title": "Nouveau référentiel résidentiel BE", "date": "2024-05-10" },
            ],
            "ContactUsData": {
                "phone": "+32 2 555 01 20",
                "hours": "Lun-ven, 9h-17h",
            },
        }),
    )
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
