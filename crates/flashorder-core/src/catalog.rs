//! Package catalog
//!
//! The fixed set of purchasable tiers shown on the page. Built once at
//! startup and never mutated. Markup refers to packages by their string
//! identifier (`basic`, `popular`, `premium`, `mega`); anything else is
//! treated as "not found".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Currency every package is denominated in
pub const CURRENCY: &str = "USDT";

/// Identifier of a catalog package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageId {
    Basic,
    Popular,
    Premium,
    Mega,
}

impl PackageId {
    /// All identifiers in display order
    pub const ALL: [PackageId; 4] = [
        PackageId::Basic,
        PackageId::Popular,
        PackageId::Premium,
        PackageId::Mega,
    ];

    /// The identifier as used in markup
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageId::Basic => "basic",
            PackageId::Popular => "popular",
            PackageId::Premium => "premium",
            PackageId::Mega => "mega",
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(PackageId::Basic),
            "popular" => Ok(PackageId::Popular),
            "premium" => Ok(PackageId::Premium),
            "mega" => Ok(PackageId::Mega),
            other => Err(CatalogError::PackageNotFound(other.to_string())),
        }
    }
}

/// A purchasable tier with fixed display attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub id: PackageId,
    pub name: &'static str,
    /// Formatted amount of currency delivered, e.g. `"2,450"`
    pub amount: &'static str,
    pub price: &'static str,
    pub currency: &'static str,
    pub discount: Option<&'static str>,
    pub original_price: Option<&'static str>,
    pub features: &'static [&'static str],
}

impl Package {
    /// View model for the modal header
    pub fn summary(&self) -> PackageSummary {
        PackageSummary {
            id: self.id,
            name: self.name.to_string(),
            currency: self.currency.to_string(),
            amount: self.amount.to_string(),
            price: self.price.to_string(),
            original_price: self.original_price.map(str::to_string),
            discount: self.discount.map(str::to_string),
        }
    }

    /// Whether the package card gets the highlighted "popular" styling
    pub fn is_featured(&self) -> bool {
        self.id == PackageId::Popular
    }
}

/// What the order modal shows about the selected package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSummary {
    pub id: PackageId,
    pub name: String,
    pub currency: String,
    pub amount: String,
    pub price: String,
    pub original_price: Option<String>,
    pub discount: Option<String>,
}

impl fmt::Display for PackageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} for {}",
            self.name, self.amount, self.currency, self.price
        )
    }
}

const BASIC: Package = Package {
    id: PackageId::Basic,
    name: "Basic Package",
    amount: "2,450",
    price: "$25",
    currency: CURRENCY,
    discount: None,
    original_price: None,
    features: &["Instant Processing", "Secure Transaction", "Email Support"],
};

const POPULAR: Package = Package {
    id: PackageId::Popular,
    name: "Popular Package",
    amount: "4,670",
    price: "$44",
    currency: CURRENCY,
    discount: None,
    original_price: None,
    features: &[
        "Instant Processing",
        "Secure Transaction",
        "Priority Support",
        "Transaction Tracking",
    ],
};

const PREMIUM: Package = Package {
    id: PackageId::Premium,
    name: "Premium Package",
    amount: "7,890",
    price: "$35",
    currency: CURRENCY,
    discount: Some("Special Discount!"),
    original_price: None,
    features: &[
        "Instant Processing",
        "Secure Transaction",
        "24/7 Support",
        "Transaction Tracking",
        "Priority Processing",
    ],
};

const MEGA: Package = Package {
    id: PackageId::Mega,
    name: "Mega Package",
    amount: "13,000",
    price: "$99",
    currency: CURRENCY,
    discount: Some("Save $50"),
    original_price: Some("$149"),
    features: &[
        "Instant Processing",
        "Secure Transaction",
        "24/7 Priority Support",
        "Transaction Tracking",
        "Priority Processing",
        "Exclusive Benefits",
    ],
};

/// Read-only mapping from package identifier to display attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    packages: Vec<Package>,
}

impl Catalog {
    /// The four standard packages
    pub fn standard() -> Self {
        Self {
            packages: vec![BASIC, POPULAR, PREMIUM, MEGA],
        }
    }

    /// Look up a package by its markup identifier.
    ///
    /// Returns `None` for any identifier outside the catalog.
    pub fn get(&self, id: &str) -> Option<&Package> {
        let id = id.parse::<PackageId>().ok()?;
        self.package(id)
    }

    /// Look up a package by typed identifier
    pub fn package(&self, id: PackageId) -> Option<&Package> {
        self.packages.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`] but reports the unknown identifier
    pub fn require(&self, id: &str) -> Result<&Package, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::PackageNotFound(id.to_string()))
    }

    /// Packages in display order
    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = Catalog::standard();
        let ids: Vec<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["basic", "popular", "premium", "mega"]);
    }

    #[test]
    fn test_lookup_known_ids() {
        let catalog = Catalog::standard();
        for id in PackageId::ALL {
            let pkg = catalog.get(id.as_str()).unwrap();
            assert_eq!(pkg.id, id);
            assert_eq!(pkg.currency, "USDT");
        }
    }

    #[test]
    fn test_lookup_unknown_ids() {
        let catalog = Catalog::standard();
        assert!(catalog.get("gold").is_none());
        assert!(catalog.get("").is_none());
        assert!(catalog.get("Basic").is_none());
        assert_eq!(
            catalog.require("gold"),
            Err(CatalogError::PackageNotFound("gold".into()))
        );
    }

    #[test]
    fn test_mega_has_discount_and_original_price() {
        let catalog = Catalog::standard();
        let mega = catalog.package(PackageId::Mega).unwrap();
        assert_eq!(mega.original_price, Some("$149"));
        assert_eq!(mega.discount, Some("Save $50"));
        assert_eq!(mega.features.len(), 6);
        assert_eq!(mega.features[5], "Exclusive Benefits");
    }

    #[test]
    fn test_summary_display() {
        let catalog = Catalog::standard();
        let summary = catalog.get("basic").unwrap().summary();
        assert_eq!(summary.to_string(), "Basic Package: 2,450 USDT for $25");
        assert_eq!(summary.original_price, None);
    }

    #[test]
    fn test_package_id_serde() {
        let json = serde_json::to_string(&PackageId::Premium).unwrap();
        assert_eq!(json, "\"premium\"");
        let id: PackageId = serde_json::from_str("\"mega\"").unwrap();
        assert_eq!(id, PackageId::Mega);
    }
}
