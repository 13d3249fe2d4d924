//! The demo catalog served by [`MockCatalog`](super::MockCatalog).

use rust_decimal::Decimal;
use shopfront_core::{CurrencyCode, Price, Product, ProductId, Rating};

struct DemoProduct {
    id: i64,
    title: &'static str,
    price_paise: i64,
    description: &'static str,
    category: &'static str,
    rate: f64,
    count: u32,
}

const DEMO_PRODUCTS: [DemoProduct; 16] = [
    DemoProduct {
        id: 1,
        title: "Fjallraven - Foldsack No. 1 Backpack",
        price_paise: 10995,
        description: "Your perfect pack for everyday use and walks in the forest. Stash your laptop (up to 15 inches) in the padded sleeve, your everyday",
        category: "men's clothing",
        rate: 3.9,
        count: 120,
    },
    DemoProduct {
        id: 2,
        title: "Mens Casual Premium Slim Fit T-Shirts",
        price_paise: 2230,
        description: "Slim-fitting style, contrast raglan long sleeve, three-button henley placket, light weight & soft fabric for breathable and comfortable wearing.",
        category: "men's clothing",
        rate: 4.1,
        count: 259,
    },
    DemoProduct {
        id: 3,
        title: "Mens Cotton Jacket",
        price_paise: 5599,
        description: "Great outerwear jackets for Spring/Autumn/Winter, suitable for many occasions, such as working, hiking, camping, mountain/rock climbing, cycling, traveling or other outdoors.",
        category: "men's clothing",
        rate: 4.7,
        count: 500,
    },
    DemoProduct {
        id: 4,
        title: "Mens Casual Slim Fit",
        price_paise: 1599,
        description: "The color could be slightly different between on the screen and in practice. Please note that body builds vary by person, therefore, detailed size information should be reviewed below on the product description.",
        category: "men's clothing",
        rate: 2.1,
        count: 430,
    },
    DemoProduct {
        id: 5,
        title: "John Hardy Women's Legends Naga Gold & Silver Dragon Station Chain Bracelet",
        price_paise: 69500,
        description: "From our Legends Collection, the Naga was inspired by the mythical water dragon that protects the ocean's pearl. Wear facing inward to be bestowed with love and abundance, or outward for protection.",
        category: "jewelery",
        rate: 4.6,
        count: 400,
    },
    DemoProduct {
        id: 6,
        title: "Solid Gold Petite Micropave",
        price_paise: 16800,
        description: "Satisfaction Guaranteed. Return or exchange any order within 30 days. Designed and sold by Hafeez Center in the United States. Satisfaction Guaranteed.",
        category: "jewelery",
        rate: 3.9,
        count: 70,
    },
    DemoProduct {
        id: 7,
        title: "White Gold Plated Princess",
        price_paise: 999,
        description: "Classic Created Wedding Engagement Solitaire Diamond Promise Ring for Her. Gifts to spoil your love more for Engagement, Wedding, Anniversary, Valentine's Day...",
        category: "jewelery",
        rate: 3.0,
        count: 400,
    },
    DemoProduct {
        id: 8,
        title: "Pierced Owl Rose Gold Plated Stainless Steel Double",
        price_paise: 1099,
        description: "Rose Gold Plated Double Flared Tunnel Plug Earrings. Made of 316L Stainless Steel",
        category: "jewelery",
        rate: 1.9,
        count: 100,
    },
    DemoProduct {
        id: 9,
        title: "WD 2TB Elements Portable External Hard Drive - USB 3.0",
        price_paise: 6400,
        description: "USB 3.0 and USB 2.0 Compatibility Fast data transfers Improve PC Performance High Capacity; Compatibility Formatted NTFS for Windows 10, Windows 8.1, Windows 7",
        category: "electronics",
        rate: 3.3,
        count: 203,
    },
    DemoProduct {
        id: 10,
        title: "SanDisk SSD PLUS 1TB Internal SSD - SATA III 6 Gb/s",
        price_paise: 10900,
        description: "Easy upgrade for faster boot up, shutdown, application load and response (As compared to 5400 RPM SATA 2.5",
        category: "electronics",
        rate: 2.9,
        count: 470,
    },
    DemoProduct {
        id: 11,
        title: "Silicon Power 256GB SSD 3D NAND A55 SLC Cache Performance Boost SATA III 2.5",
        price_paise: 8900,
        description: "3D NAND flash are applied to deliver high transfer speeds Remarkable transfer speeds that enable faster bootup and improved overall system performance.",
        category: "electronics",
        rate: 4.8,
        count: 319,
    },
    DemoProduct {
        id: 12,
        title: "WD 4TB Gaming Drive Works with Playstation 4 Portable External Hard Drive",
        price_paise: 11400,
        description: "Expand your PS4 gaming experience, Play anywhere Fast and easy setup. Sleek design with high capacity, 3-year manufacturer's limited warranty",
        category: "electronics",
        rate: 4.8,
        count: 400,
    },
    DemoProduct {
        id: 13,
        title: "Acer SB220Q bi 21.5 inches Full HD (1920 x 1080) IPS Ultra-Thin",
        price_paise: 59900,
        description: "21. 5 inches Full HD (1920 x 1080) widescreen IPS display And Radeon free Sync technology. No compatibility for VESA Mount Refresh Rate: 75Hz",
        category: "electronics",
        rate: 2.9,
        count: 250,
    },
    DemoProduct {
        id: 14,
        title: "Samsung 49-Inch CHG90 144Hz Curved Gaming Monitor (LC49HG90DMNXZA) – Super Ultrawide Screen QLED",
        price_paise: 99999,
        description: "49 INCH SUPER ULTRAWIDE 32:9 CURVED GAMING MONITOR with dual 27 inch screen side by side. QUANTUM DOT (QLED) TECHNOLOGY, HDR support and factory calibration",
        category: "electronics",
        rate: 2.2,
        count: 140,
    },
    DemoProduct {
        id: 15,
        title: "BIYLACLESEN Women's 3-in-1 Snowboard Jacket Winter Coats",
        price_paise: 5699,
        description: "Note:The Jackets is US standard size, Please choose size as your usual wear Material: 100% Polyester; Detachable Liner Fabric: Warm Fleece.",
        category: "women's clothing",
        rate: 2.6,
        count: 235,
    },
    DemoProduct {
        id: 16,
        title: "Lock and Love Women's Removable Hooded Faux Leather Moto Biker Jacket",
        price_paise: 2995,
        description: "100% POLYURETHANE(shell) 100% POLYESTER(lining) 75% POLYESTER 25% COTTON (SWEATER), Faux leather material for style and comfort / 2 pockets of front",
        category: "women's clothing",
        rate: 2.9,
        count: 340,
    },
];

/// The sixteen demo products, priced in `currency`.
pub(super) fn demo_products(currency: CurrencyCode) -> Vec<Product> {
    DEMO_PRODUCTS
        .iter()
        .map(|p| Product {
            id: ProductId::new(p.id),
            title: p.title.to_string(),
            price: Price::new(Decimal::new(p.price_paise, 2), currency),
            description: p.description.to_string(),
            category: p.category.to_string(),
            image: format!("https://picsum.photos/400/400?random={}", p.id),
            rating: Rating {
                rate: p.rate,
                count: p.count,
            },
        })
        .collect()
}
