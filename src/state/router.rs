//! Full-screen views that replace the main shell.
//!
//! At most one screen is open. Every `open_*` call overwrites whatever was
//! open before and `back` always lands on [`ScreenId::Main`].

use tracing::{debug, info};

use crate::catalog::{Bundle, Catalog, Product};

/// Similar products shown under a product detail.
pub const SIMILAR_LIMIT: usize = 4;

pub const DEFAULT_LIST_CATEGORY: &str = "all";
pub const DEFAULT_LIST_TITLE: &str = "All Products";

/// Copyable tag identifying the open screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Main,
    Wishlist,
    Bag,
    ProductDetail,
    BundleDetail,
    ProductList,
}

/// The open screen together with the records it renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenState {
    #[default]
    Main,
    Wishlist,
    Bag,
    ProductDetail {
        product: Product,
        similar: Vec<Product>,
    },
    BundleDetail {
        bundle: Bundle,
        products: Vec<Product>,
    },
    ProductList {
        category: String,
        title: String,
        products: Vec<Product>,
    },
}

impl ScreenState {
    pub fn id(&self) -> ScreenId {
        match self {
            ScreenState::Main => ScreenId::Main,
            ScreenState::Wishlist => ScreenId::Wishlist,
            ScreenState::Bag => ScreenId::Bag,
            ScreenState::ProductDetail { .. } => ScreenId::ProductDetail,
            ScreenState::BundleDetail { .. } => ScreenId::BundleDetail,
            ScreenState::ProductList { .. } => ScreenId::ProductList,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScreenRouter {
    screen: ScreenState,
}

impl ScreenRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn current(&self) -> ScreenId {
        self.screen.id()
    }

    pub fn is_main(&self) -> bool {
        self.current() == ScreenId::Main
    }

    fn show(&mut self, screen: ScreenState) -> ScreenId {
        let id = screen.id();
        if id != self.current() {
            info!(from = ?self.current(), to = ?id, "screen change");
        }
        self.screen = screen;
        id
    }

    pub fn open_wishlist(&mut self) -> ScreenId {
        self.show(ScreenState::Wishlist)
    }

    pub fn open_bag(&mut self) -> ScreenId {
        self.show(ScreenState::Bag)
    }

    /// Open a product's detail screen, or fall back to Main if the id is
    /// empty or unknown.
    pub fn open_product_detail(&mut self, id: &str, catalog: &dyn Catalog) -> ScreenId {
        let Some(product) = lookup(id, |id| catalog.find_product(id)) else {
            debug!(id, "product not found, showing main");
            return self.show(ScreenState::Main);
        };
        let similar = catalog.similar_products(&product, SIMILAR_LIMIT);
        self.show(ScreenState::ProductDetail { product, similar })
    }

    /// Open a bundle's detail screen, or fall back to Main if the id is
    /// empty or unknown. Member products that cannot be resolved are left out.
    pub fn open_bundle_detail(&mut self, id: &str, catalog: &dyn Catalog) -> ScreenId {
        let Some(bundle) = lookup(id, |id| catalog.find_bundle(id)) else {
            debug!(id, "bundle not found, showing main");
            return self.show(ScreenState::Main);
        };
        let products = bundle
            .product_ids
            .iter()
            .filter_map(|pid| catalog.find_product(pid))
            .collect();
        self.show(ScreenState::BundleDetail { bundle, products })
    }

    /// Open a product list. Missing parameters fall back to every product.
    pub fn open_product_list(
        &mut self,
        category: Option<&str>,
        title: Option<&str>,
        catalog: &dyn Catalog,
    ) -> ScreenId {
        let category = category
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_LIST_CATEGORY)
            .to_string();
        let title = title
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_LIST_TITLE)
            .to_string();
        let products = catalog.products_in_category(&category);
        self.show(ScreenState::ProductList {
            category,
            title,
            products,
        })
    }

    /// Close whatever is open.
    pub fn back(&mut self) -> ScreenId {
        self.show(ScreenState::Main)
    }
}

fn lookup<T>(id: &str, find: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    find(id)
}
