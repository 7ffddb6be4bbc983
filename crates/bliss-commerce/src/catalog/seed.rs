//! Static catalog seed data.

use super::{Category, Product};
use crate::ids::ProductId;

struct SeedProduct {
    id: u32,
    name: &'static str,
    category: &'static str,
    subcategory: &'static str,
    price: &'static str,
    original_price: Option<&'static str>,
    rating: f32,
    reviews: u32,
    images: &'static [&'static str],
    description: &'static str,
    features: &'static [&'static str],
    trending: bool,
    new_arrival: bool,
    best_seller: bool,
}

impl From<&SeedProduct> for Product {
    fn from(seed: &SeedProduct) -> Self {
        Product {
            id: ProductId(seed.id),
            name: seed.name.to_string(),
            category: seed.category.to_string(),
            subcategory: seed.subcategory.to_string(),
            price: seed.price.to_string(),
            original_price: seed.original_price.map(str::to_string),
            rating: seed.rating,
            reviews: seed.reviews,
            images: seed.images.iter().map(|s| s.to_string()).collect(),
            description: seed.description.to_string(),
            features: seed.features.iter().map(|s| s.to_string()).collect(),
            trending: seed.trending,
            new_arrival: seed.new_arrival,
            best_seller: seed.best_seller,
        }
    }
}

pub(crate) fn categories() -> Vec<Category> {
    vec![
        Category::new(
            "bridal-wear",
            "Bridal Wear",
            "Lehengas, sarees and gowns for the big day",
            &[("lehengas", "Lehengas"), ("sarees", "Sarees"), ("gowns", "Gowns")],
        ),
        Category::new(
            "groom-wear",
            "Groom Wear",
            "Sherwanis, bandhgalas and suits",
            &[("sherwanis", "Sherwanis"), ("suits", "Suits")],
        ),
        Category::new(
            "jewelry",
            "Jewelry",
            "Heirloom and contemporary bridal jewelry",
            &[("necklaces", "Necklaces"), ("earrings", "Earrings"), ("bangles", "Bangles")],
        ),
        Category::new(
            "decor",
            "Decor",
            "Mandaps, florals and lighting",
            &[("mandap", "Mandap"), ("floral", "Floral"), ("lighting", "Lighting")],
        ),
        Category::new(
            "invitations",
            "Invitations",
            "Printed and digital wedding invitations",
            &[("printed", "Printed"), ("digital", "Digital")],
        ),
    ]
}

pub(crate) fn products() -> Vec<Product> {
    PRODUCTS.iter().map(Product::from).collect()
}

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        id: 1,
        name: "Crimson Silk Bridal Lehenga",
        category: "bridal-wear",
        subcategory: "lehengas",
        price: "\u{20b9}1,25,000",
        original_price: Some("\u{20b9}1,50,000"),
        rating: 4.8,
        reviews: 214,
        images: &["/images/products/crimson-lehenga-1.jpg", "/images/products/crimson-lehenga-2.jpg"],
        description: "Hand-embroidered raw silk lehenga with zardozi and gold zari borders.",
        features: &["Raw Silk", "Zardozi", "Custom Fit", "Dupatta Included"],
        trending: true,
        new_arrival: false,
        best_seller: true,
    },
    SeedProduct {
        id: 2,
        name: "Blush Pink Organza Lehenga",
        category: "bridal-wear",
        subcategory: "lehengas",
        price: "\u{20b9}85,000",
        original_price: None,
        rating: 4.6,
        reviews: 98,
        images: &["/images/products/blush-lehenga-1.jpg"],
        description: "Lightweight organza with pearl and sequin detailing for day ceremonies.",
        features: &["Organza", "Pearl Work", "Lightweight"],
        trending: false,
        new_arrival: true,
        best_seller: false,
    },
    SeedProduct {
        id: 3,
        name: "Banarasi Kanjeevaram Saree",
        category: "bridal-wear",
        subcategory: "sarees",
        price: "\u{20b9}62,500",
        original_price: Some("\u{20b9}70,000"),
        rating: 4.9,
        reviews: 311,
        images: &["/images/products/kanjeevaram-1.jpg", "/images/products/kanjeevaram-2.jpg"],
        description: "Pure mulberry silk woven with traditional temple motifs.",
        features: &["Pure Silk", "Gold Zari", "Handloom"],
        trending: false,
        new_arrival: false,
        best_seller: true,
    },
    SeedProduct {
        id: 4,
        name: "Ivory Lace Reception Gown",
        category: "bridal-wear",
        subcategory: "gowns",
        price: "\u{20b9}48,000",
        original_price: None,
        rating: 4.4,
        reviews: 57,
        images: &["/images/products/ivory-gown-1.jpg"],
        description: "Chantilly lace gown with a cathedral train for the reception.",
        features: &["Chantilly Lace", "Cathedral Train"],
        trending: true,
        new_arrival: true,
        best_seller: false,
    },
    SeedProduct {
        id: 5,
        name: "Royal Ivory Sherwani",
        category: "groom-wear",
        subcategory: "sherwanis",
        price: "\u{20b9}55,000",
        original_price: Some("\u{20b9}60,000"),
        rating: 4.7,
        reviews: 176,
        images: &["/images/products/ivory-sherwani-1.jpg", "/images/products/ivory-sherwani-2.jpg"],
        description: "Jacquard sherwani with antique buttons and a matching stole.",
        features: &["Jacquard", "Stole Included", "Custom Fit"],
        trending: true,
        new_arrival: false,
        best_seller: true,
    },
    SeedProduct {
        id: 6,
        name: "Midnight Velvet Bandhgala",
        category: "groom-wear",
        subcategory: "suits",
        price: "\u{20b9}32,000",
        original_price: None,
        rating: 4.3,
        reviews: 64,
        images: &["/images/products/velvet-bandhgala-1.jpg"],
        description: "Tailored velvet bandhgala for sangeet and cocktail evenings.",
        features: &["Velvet", "Tailored"],
        trending: false,
        new_arrival: true,
        best_seller: false,
    },
    SeedProduct {
        id: 7,
        name: "Kundan Bridal Necklace Set",
        category: "jewelry",
        subcategory: "necklaces",
        price: "\u{20b9}75,000",
        original_price: Some("\u{20b9}90,000"),
        rating: 4.8,
        reviews: 189,
        images: &["/images/products/kundan-necklace-1.jpg", "/images/products/kundan-necklace-2.jpg"],
        description: "Kundan and polki choker with matching earrings, set in 22k gold plating.",
        features: &["Kundan", "Polki", "22K Gold Plated"],
        trending: true,
        new_arrival: false,
        best_seller: true,
    },
    SeedProduct {
        id: 8,
        name: "Temple Jhumka Earrings",
        category: "jewelry",
        subcategory: "earrings",
        price: "\u{20b9}18,500",
        original_price: None,
        rating: 4.5,
        reviews: 142,
        images: &["/images/products/temple-jhumka-1.jpg"],
        description: "Antique finish jhumkas inspired by South Indian temple jewelry.",
        features: &["Antique Finish", "Lightweight"],
        trending: false,
        new_arrival: false,
        best_seller: true,
    },
    SeedProduct {
        id: 9,
        name: "Rose Gold Diamond Bangles",
        category: "jewelry",
        subcategory: "bangles",
        price: "\u{20b9}2,40,000",
        original_price: None,
        rating: 4.9,
        reviews: 43,
        images: &["/images/products/rosegold-bangles-1.jpg"],
        description: "Pair of certified diamond bangles in 18k rose gold.",
        features: &["Certified Diamonds", "18K"],
        trending: false,
        new_arrival: true,
        best_seller: false,
    },
    SeedProduct {
        id: 10,
        name: "Marigold Mandap Package",
        category: "decor",
        subcategory: "mandap",
        price: "\u{20b9}1,80,000",
        original_price: Some("\u{20b9}2,00,000"),
        rating: 4.6,
        reviews: 88,
        images: &["/images/products/marigold-mandap-1.jpg", "/images/products/marigold-mandap-2.jpg"],
        description: "Traditional four-pillar mandap dressed in fresh marigold and mogra.",
        features: &["Fresh Flowers", "Setup Included", "Four Pillar"],
        trending: true,
        new_arrival: false,
        best_seller: false,
    },
    SeedProduct {
        id: 11,
        name: "Pastel Floral Arch",
        category: "decor",
        subcategory: "floral",
        price: "\u{20b9}45,000",
        original_price: None,
        rating: 4.2,
        reviews: 39,
        images: &["/images/products/floral-arch-1.jpg"],
        description: "Entrance arch of peonies, roses and hydrangeas in pastel tones.",
        features: &["Fresh Flowers", "Entrance Decor"],
        trending: false,
        new_arrival: true,
        best_seller: false,
    },
    SeedProduct {
        id: 12,
        name: "Fairy Light Canopy",
        category: "decor",
        subcategory: "lighting",
        price: "\u{20b9}28,000",
        original_price: Some("\u{20b9}32,000"),
        rating: 4.5,
        reviews: 71,
        images: &["/images/products/fairy-canopy-1.jpg"],
        description: "Warm white fairy light canopy for mehendi and sangeet venues.",
        features: &["Warm White", "Indoor & Outdoor", "Setup Included"],
        trending: false,
        new_arrival: false,
        best_seller: true,
    },
    SeedProduct {
        id: 13,
        name: "Laser-Cut Royal Invitation",
        category: "invitations",
        subcategory: "printed",
        price: "\u{20b9}350",
        original_price: None,
        rating: 4.4,
        reviews: 256,
        images: &["/images/products/lasercut-invite-1.jpg"],
        description: "Laser-cut shimmer card with gold foil monogram, priced per invite.",
        features: &["Gold Foil", "Monogram", "Per Invite"],
        trending: false,
        new_arrival: false,
        best_seller: true,
    },
    SeedProduct {
        id: 14,
        name: "Animated E-Invite",
        category: "invitations",
        subcategory: "digital",
        price: "\u{20b9}4,999",
        original_price: Some("\u{20b9}6,999"),
        rating: 4.1,
        reviews: 33,
        images: &["/images/products/animated-einvite-1.jpg"],
        description: "Personalised animated video invitation with RSVP link.",
        features: &["Video", "RSVP Link", "WhatsApp Ready"],
        trending: true,
        new_arrival: true,
        best_seller: false,
    },
    SeedProduct {
        id: 15,
        name: "Chikankari Pastel Saree",
        category: "bridal-wear",
        subcategory: "sarees",
        price: "\u{20b9}24,000",
        original_price: None,
        rating: 4.3,
        reviews: 52,
        images: &["/images/products/chikankari-saree-1.jpg"],
        description: "Georgette saree with Lucknowi chikankari for the haldi ceremony.",
        features: &["Georgette", "Hand Embroidered"],
        trending: false,
        new_arrival: true,
        best_seller: false,
    },
    SeedProduct {
        id: 16,
        name: "Emerald Polki Maang Tikka",
        category: "jewelry",
        subcategory: "earrings",
        price: "Price on request",
        original_price: None,
        rating: 4.0,
        reviews: 12,
        images: &["/images/products/emerald-tikka-1.jpg"],
        description: "Bespoke polki maang tikka with carved emerald drops, quoted on request.",
        features: &["Bespoke", "Emerald"],
        trending: false,
        new_arrival: false,
        best_seller: false,
    },
];
