//! Product and bundle lookup.
//!
//! The router only ever asks a [`Catalog`] for records by id. Two static
//! datasets ship with the app: the jewelry collection and a small featured
//! set (the evening dress, the statement earrings and the evening bundle).
//! [`default_catalog`] chains them with [`TieredCatalog`]: the jewelry
//! collection is consulted first and the featured set only on a miss.

pub mod content;
pub mod search;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const JEWELRY_JSON: &str = include_str!("../../assets/catalog/jewelry.json");
const FEATURED_JSON: &str = include_str!("../../assets/catalog/featured.json");

/// A purchasable product. Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    pub rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

impl Product {
    /// Description shown on the detail screen, generated when the record has none.
    pub fn description_or_default(&self) -> String {
        self.description.clone().unwrap_or_else(|| {
            format!(
                "Exquisite {} crafted with precision and elegance. Traditional craftsmanship meets contemporary design.",
                self.name.to_lowercase()
            )
        })
    }

    /// Material line for the detail screen, derived from the category when unset.
    pub fn material(&self) -> &str {
        if let Some(material) = self.material.as_deref() {
            return material;
        }
        match self.category.as_str() {
            "bangles" => "22K Gold",
            "pendants" => "Gold Plated Sterling Silver",
            "rings" => "18K Gold",
            _ => "14K Gold",
        }
    }

    /// Percentage saved against the original price, if discounted.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price {
            return None;
        }
        Some((original - self.price) * 100 / original)
    }
}

/// A curated set of products sold together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: String,
    pub name: String,
    pub description: String,
    pub product_ids: Vec<String>,
    pub total_price: u32,
    pub discounted_price: u32,
    pub rating: f32,
}

impl Bundle {
    pub fn savings(&self) -> u32 {
        self.total_price.saturating_sub(self.discounted_price)
    }

    pub fn savings_percent(&self) -> u32 {
        if self.total_price == 0 {
            return 0;
        }
        self.savings() * 100 / self.total_price
    }
}

/// Lookup service consulted by the screen router.
pub trait Catalog {
    fn find_product(&self, id: &str) -> Option<Product>;

    fn find_bundle(&self, id: &str) -> Option<Bundle>;

    /// Every product, in catalog order.
    fn all_products(&self) -> Vec<Product>;

    /// Every bundle, in catalog order.
    fn all_bundles(&self) -> Vec<Bundle>;

    /// Products in a category; `all` returns everything.
    fn products_in_category(&self, category: &str) -> Vec<Product> {
        let products = self.all_products();
        if category == "all" {
            return products;
        }
        products
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Up to `limit` other products from the same category.
    fn similar_products(&self, product: &Product, limit: usize) -> Vec<Product> {
        self.products_in_category(&product.category)
            .into_iter()
            .filter(|p| p.id != product.id)
            .take(limit)
            .collect()
    }
}

/// An in-memory catalog backed by a fixed dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    bundles: Vec<Bundle>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>, bundles: Vec<Bundle>) -> Self {
        Self { products, bundles }
    }

    /// Parse a catalog from JSON of the form `{ "products": [..], "bundles": [..] }`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse catalog data")
    }

    /// The bundled jewelry collection.
    pub fn jewelry() -> Result<Self> {
        Self::from_json(JEWELRY_JSON).context("jewelry catalog")
    }

    /// The bundled featured products and bundles.
    pub fn featured() -> Result<Self> {
        Self::from_json(FEATURED_JSON).context("featured catalog")
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for StaticCatalog {
    fn find_product(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn find_bundle(&self, id: &str) -> Option<Bundle> {
        self.bundles.iter().find(|b| b.id == id).cloned()
    }

    fn all_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn all_bundles(&self) -> Vec<Bundle> {
        self.bundles.clone()
    }
}

/// Two catalogs chained: `primary` answers first, `secondary` only on a miss.
#[derive(Debug, Clone)]
pub struct TieredCatalog<P, S> {
    primary: P,
    secondary: S,
}

impl<P: Catalog, S: Catalog> TieredCatalog<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: Catalog, S: Catalog> Catalog for TieredCatalog<P, S> {
    fn find_product(&self, id: &str) -> Option<Product> {
        self.primary
            .find_product(id)
            .or_else(|| self.secondary.find_product(id))
    }

    fn find_bundle(&self, id: &str) -> Option<Bundle> {
        self.primary
            .find_bundle(id)
            .or_else(|| self.secondary.find_bundle(id))
    }

    fn all_products(&self) -> Vec<Product> {
        let mut products = self.primary.all_products();
        for product in self.secondary.all_products() {
            if !products.iter().any(|p| p.id == product.id) {
                products.push(product);
            }
        }
        products
    }

    fn all_bundles(&self) -> Vec<Bundle> {
        let mut bundles = self.primary.all_bundles();
        for bundle in self.secondary.all_bundles() {
            if !bundles.iter().any(|b| b.id == bundle.id) {
                bundles.push(bundle);
            }
        }
        bundles
    }
}

/// The catalog the app ships with.
pub type DefaultCatalog = TieredCatalog<StaticCatalog, StaticCatalog>;

/// Jewelry collection first, featured set second.
pub fn default_catalog() -> Result<DefaultCatalog> {
    Ok(TieredCatalog::new(
        StaticCatalog::jewelry()?,
        StaticCatalog::featured()?,
    ))
}

/// Format a rupee amount with Indian digit grouping, e.g. `₹1,25,000`.
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalogs_parse() {
        let jewelry = StaticCatalog::jewelry().unwrap();
        let featured = StaticCatalog::featured().unwrap();
        assert_eq!(jewelry.len(), 43);
        assert!(featured.find_bundle("b1").is_some());
    }

    #[test]
    fn test_tiered_lookup_prefers_primary() {
        let primary = StaticCatalog::new(
            vec![product("x", "Primary X", "rings")],
            Vec::new(),
        );
        let secondary = StaticCatalog::new(
            vec![
                product("x", "Secondary X", "rings"),
                product("y", "Secondary Y", "rings"),
            ],
            Vec::new(),
        );
        let catalog = TieredCatalog::new(primary, secondary);

        assert_eq!(catalog.find_product("x").unwrap().name, "Primary X");
        assert_eq!(catalog.find_product("y").unwrap().name, "Secondary Y");
        assert!(catalog.find_product("z").is_none());
        assert_eq!(catalog.all_products().len(), 2);
    }

    #[test]
    fn test_default_catalog_two_tiers() {
        let catalog = default_catalog().unwrap();
        assert!(catalog.find_product("ring-3").is_some());
        assert!(catalog.find_product("p1").is_some());
        assert!(catalog.find_bundle("b1").is_some());
        assert!(catalog.find_product("unknown-id").is_none());
    }

    #[test]
    fn test_similar_products_excludes_self() {
        let catalog = default_catalog().unwrap();
        let ring = catalog.find_product("ring-1").unwrap();
        let similar = catalog.similar_products(&ring, 4);
        assert_eq!(similar.len(), 4);
        assert!(similar.iter().all(|p| p.category == "rings" && p.id != "ring-1"));
    }

    #[test]
    fn test_derived_material() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.find_product("bangle-1").unwrap().material(), "22K Gold");
        assert_eq!(catalog.find_product("earring-2").unwrap().material(), "14K Gold");
        assert_eq!(
            catalog.find_product("p1").unwrap().material(),
            "100% Mulberry Silk"
        );
    }

    #[test]
    fn test_bundle_savings() {
        let bundle = StaticCatalog::featured().unwrap().find_bundle("b1").unwrap();
        assert_eq!(bundle.savings(), 1999);
        assert_eq!(bundle.savings_percent(), 12);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "₹0");
        assert_eq!(format_price(999), "₹999");
        assert_eq!(format_price(2499), "₹2,499");
        assert_eq!(format_price(18500), "₹18,500");
        assert_eq!(format_price(125_000), "₹1,25,000");
        assert_eq!(format_price(12_345_678), "₹1,23,45,678");
    }

    fn product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price: 1000,
            original_price: None,
            rating: 4.5,
            badge: None,
            description: None,
            sizes: Vec::new(),
            material: None,
        }
    }
}
