//! Fixed editorial content shown in the shell: featured collections per
//! commerce category, the community feed and the create-tab prompt ideas.

use crate::state::tabs::CommerceCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedCollection {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Catalog category the collection browses.
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedPost {
    pub id: &'static str,
    pub username: &'static str,
    pub time_ago: &'static str,
    pub caption: &'static str,
    pub likes: u32,
    pub comments: u32,
    pub hashtags: &'static [&'static str],
    /// Catalog ids of the products tagged in the post.
    pub products: &'static [&'static str],
    /// Prompt handed to the create tab when the post is remixed.
    pub prompt: &'static str,
}

const fn collection(
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    category: &'static str,
) -> FeaturedCollection {
    FeaturedCollection {
        id,
        title,
        subtitle,
        category,
    }
}

const WOMEN: &[FeaturedCollection] = &[
    collection("heritage-gold", "Heritage Gold", "Timeless pieces crafted with tradition", "bangles"),
    collection("diamond-luxe", "Diamond Luxe", "Brilliance that captivates", "rings"),
    collection("pearl-elegance", "Pearl Elegance", "Sophistication in every detail", "earrings"),
    collection("bridal-collection", "Bridal Dreams", "Perfect for your special day", "pendants"),
];

const MEN: &[FeaturedCollection] = &[
    collection("executive-gold", "Executive Collection", "Refined pieces for the modern man", "bracelets"),
    collection("platinum-power", "Platinum Power", "Bold statements in precious metal", "rings"),
    collection("minimal-bands", "Minimal Bands", "Understated elegance", "rings"),
    collection("formal-cufflinks", "Formal Essentials", "Complete your professional look", "bracelets"),
];

const INCLUSIVE: &[FeaturedCollection] = &[
    collection("unisex-minimalist", "Unisex Minimalist", "Designs for everyone", "pendants"),
    collection("pride-collection", "Pride Collection", "Celebrate love & diversity", "rings"),
    collection("neutral-designs", "Neutral Designs", "Timeless & versatile", "bracelets"),
    collection("custom-engravings", "Custom Engravings", "Make it uniquely yours", "bangles"),
];

const KIDS: &[FeaturedCollection] = &[
    collection("little-charms", "Little Charms", "Adorable pieces for little ones", "bracelets"),
    collection("birthstone-collection", "Birthstone Magic", "Personalized for your child", "pendants"),
    collection("safe-wear", "Safe & Gentle", "Designed for delicate skin", "earrings"),
    collection("gift-sets", "Gift Sets", "Perfect for special occasions", "all"),
];

/// Featured collections of a category view. The `All` view has none; it
/// shows the full storefront instead.
pub fn featured_collections(category: CommerceCategory) -> &'static [FeaturedCollection] {
    match category {
        CommerceCategory::All => &[],
        CommerceCategory::Women => WOMEN,
        CommerceCategory::Men => MEN,
        CommerceCategory::Inclusive => INCLUSIVE,
        CommerceCategory::Kids => KIDS,
    }
}

pub const FEED: &[FeedPost] = &[
    FeedPost {
        id: "1",
        username: "luxe.fashion",
        time_ago: "2h",
        caption: "Elegance never goes out of style",
        likes: 2847,
        comments: 124,
        hashtags: &["luxury", "fashion", "ootd"],
        products: &["p1", "p2"],
        prompt: "A silk evening gown paired with diamond statement earrings",
    },
    FeedPost {
        id: "2",
        username: "minimal.vibes",
        time_ago: "5h",
        caption: "Less is more ✨",
        likes: 1923,
        comments: 87,
        hashtags: &["minimal", "diamonds"],
        products: &["ring-2"],
        prompt: "A minimalist solitaire ring with a thin platinum band",
    },
    FeedPost {
        id: "3",
        username: "style.insider",
        time_ago: "8h",
        caption: "Creating moments that matter 💫",
        likes: 3456,
        comments: 201,
        hashtags: &["moments", "pearls"],
        products: &["earring-3"],
        prompt: "Pearl drop earrings for a garden wedding",
    },
    FeedPost {
        id: "4",
        username: "glam.diary",
        time_ago: "12h",
        caption: "Shine bright like a diamond",
        likes: 4102,
        comments: 156,
        hashtags: &["sparkle", "diamond"],
        products: &["bracelet-1"],
        prompt: "A diamond tennis bracelet with a hidden clasp",
    },
    FeedPost {
        id: "5",
        username: "haute.couture",
        time_ago: "1d",
        caption: "Couture at its finest 👗",
        likes: 5230,
        comments: 312,
        hashtags: &["couture", "gold"],
        products: &["pendant-1"],
        prompt: "A rose gold pendant inspired by couture embroidery",
    },
    FeedPost {
        id: "6",
        username: "chic.styles",
        time_ago: "2d",
        caption: "Timeless elegance",
        likes: 2210,
        comments: 98,
        hashtags: &["timeless", "bangles"],
        products: &["bangle-3"],
        prompt: "A stack of traditional gold bangles with temple motifs",
    },
];

/// Prompt ideas offered in the create chat.
pub const PROMPT_IDEAS: &[&str] = &[
    "Design a vintage-inspired engagement ring",
    "Create a minimalist gold necklace",
    "A statement cocktail ring with an emerald",
    "Pearl earrings with a modern twist",
    "A charm bracelet for a first birthday",
];

/// Look up a feed post by id.
pub fn find_post(id: &str) -> Option<&'static FeedPost> {
    FEED.iter().find(|p| p.id == id)
}
