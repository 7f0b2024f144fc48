//! Search result provider.
//!
//! Given a query and the active tab, produce categorized result lists. The
//! search overlay owns only whether it is open and what was typed; the
//! results come from here.

use super::{Catalog, Product};
use crate::state::tabs::PrimaryTab;

const MAX_PRODUCTS: usize = 3;
const MAX_DEALS: usize = 2;

/// Community posts that can surface in search.
const COMMUNITY_POSTS: &[(&str, &str)] = &[
    ("My Wedding Jewelry Journey", "@sarah_designs"),
    ("Styling Gold Bangles for the Festive Season", "@priya.styles"),
    ("Everyday Diamond Studs, Three Ways", "@minimal.muse"),
    ("Layering Pendants Like a Pro", "@the_gilded_edit"),
    ("Pearls Are Back: Spring Looks", "@vintage_vera"),
];

/// Top-level grouping of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCategory {
    Shop,
    Community,
    Ai,
}

impl ResultCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ResultCategory::Shop => "Shop",
            ResultCategory::Community => "Community",
            ResultCategory::Ai => "AI Create",
        }
    }
}

/// What kind of thing a hit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Product,
    Collection,
    Combo,
    NewArrival,
    Deal,
    CommunityPost,
    AiCreate,
}

/// Where selecting a hit navigates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTarget {
    Product(String),
    Bundle(String),
    ProductList { category: String, title: String },
    Community,
    Create,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub kind: HitKind,
    pub title: String,
    pub subtitle: Option<String>,
    pub target: SearchTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSection {
    pub category: ResultCategory,
    pub hits: Vec<SearchHit>,
}

/// Results grouped into sections, already in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub sections: Vec<SearchSection>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.hits.is_empty())
    }

    /// Total number of hits across all sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.hits.len()).sum()
    }

    /// Hit at a flattened index (section order, then hit order).
    pub fn hit(&self, index: usize) -> Option<&SearchHit> {
        self.sections.iter().flat_map(|s| s.hits.iter()).nth(index)
    }
}

/// Anything that can answer a search.
pub trait SearchProvider {
    fn search(&self, query: &str, tab: PrimaryTab) -> SearchResults;
}

/// Searches product names and categories in a [`Catalog`], plus the fixed
/// community and AI entries.
pub struct CatalogSearch<'a> {
    catalog: &'a dyn Catalog,
}

impl<'a> CatalogSearch<'a> {
    pub fn new(catalog: &'a dyn Catalog) -> Self {
        Self { catalog }
    }

    fn shop_hits(&self, needle: &str) -> Vec<SearchHit> {
        let matches: Vec<Product> = self
            .catalog
            .all_products()
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(needle) || p.category.contains(needle)
            })
            .collect();

        let mut hits: Vec<SearchHit> = matches
            .iter()
            .take(MAX_PRODUCTS)
            .map(|p| SearchHit {
                kind: HitKind::Product,
                title: p.name.clone(),
                subtitle: Some(super::format_price(p.price)),
                target: SearchTarget::Product(p.id.clone()),
            })
            .collect();

        let mut categories: Vec<&str> = Vec::new();
        for product in &matches {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        for category in categories {
            let title = format!("{} Collection", capitalize(category));
            hits.push(SearchHit {
                kind: HitKind::Collection,
                subtitle: Some(format!("Browse all {}", category)),
                target: SearchTarget::ProductList {
                    category: category.to_string(),
                    title: title.clone(),
                },
                title,
            });
        }

        for bundle in self.catalog.all_bundles() {
            let in_bundle = bundle
                .product_ids
                .iter()
                .any(|id| matches.iter().any(|p| &p.id == id));
            if in_bundle || bundle.name.to_lowercase().contains(needle) {
                hits.push(SearchHit {
                    kind: HitKind::Combo,
                    title: bundle.name.clone(),
                    subtitle: Some(format!("Save {}", super::format_price(bundle.savings()))),
                    target: SearchTarget::Bundle(bundle.id.clone()),
                });
            }
        }

        if let Some(fresh) = matches.iter().find(|p| p.badge.as_deref() == Some("New")) {
            hits.push(SearchHit {
                kind: HitKind::NewArrival,
                title: fresh.name.clone(),
                subtitle: Some("New arrival".to_string()),
                target: SearchTarget::Product(fresh.id.clone()),
            });
        }

        for deal in matches
            .iter()
            .filter(|p| p.discount_percent().is_some())
            .take(MAX_DEALS)
        {
            hits.push(SearchHit {
                kind: HitKind::Deal,
                title: deal.name.clone(),
                subtitle: deal
                    .discount_percent()
                    .map(|pct| format!("{}% off", pct)),
                target: SearchTarget::Product(deal.id.clone()),
            });
        }

        hits
    }
}

impl SearchProvider for CatalogSearch<'_> {
    fn search(&self, query: &str, tab: PrimaryTab) -> SearchResults {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResults::default();
        }

        let shop = SearchSection {
            category: ResultCategory::Shop,
            hits: self.shop_hits(&needle),
        };
        let community = SearchSection {
            category: ResultCategory::Community,
            hits: community_hits(&needle),
        };
        let ai = SearchSection {
            category: ResultCategory::Ai,
            hits: vec![SearchHit {
                kind: HitKind::AiCreate,
                title: format!("Create \"{}\" in AI Playground", query.trim()),
                subtitle: Some("Design custom jewelry with AI".to_string()),
                target: SearchTarget::Create,
            }],
        };

        let ordered = match tab {
            PrimaryTab::Community => vec![community, shop, ai],
            _ => vec![shop, community, ai],
        };

        SearchResults {
            sections: ordered.into_iter().filter(|s| !s.hits.is_empty()).collect(),
        }
    }
}

fn community_hits(needle: &str) -> Vec<SearchHit> {
    COMMUNITY_POSTS
        .iter()
        .filter(|(title, _)| {
            let title = title.to_lowercase();
            needle.split_whitespace().any(|word| title.contains(word))
        })
        .map(|(title, author)| SearchHit {
            kind: HitKind::CommunityPost,
            title: (*title).to_string(),
            subtitle: Some(format!("Shared by {}", author)),
            target: SearchTarget::Community,
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
