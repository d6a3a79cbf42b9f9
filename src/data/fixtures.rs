//! The static mock catalog. Fully defined at compile time.

use crate::domain::CategoryId;
use crate::models::{
    Category, PriceTick, ResultRecord, Subcategory, SubcategoryIcon as Icon, TickKind,
};

pub(super) static CATEGORIES: [Category; 5] = [
    GROCERIES, COSMETICS, TRANSPORT, MEDICINES, SHOPPING,
];

pub(super) const GROCERIES: Category = Category {
    id: CategoryId::Groceries,
    label: "Groceries — Fresh & Trustworthy",
    emoji: "🥦",
    description: "Compare grocery prices across platforms with Fresh Mint Market theme",
    hero_text: "Find the best deals on everyday essentials, because saving money shouldn't compromise freshness.",
    theme: "fresh-mint",
    search_placeholder: "Search for groceries or paste a link...",
    demo_query: "Organic Basmati Rice 5kg",
    ticker: &[
        PriceTick::new(TickKind::Drop, "Onions down 12% on Blinkit"),
        PriceTick::new(TickKind::Rise, "Tomatoes up 5% on Zepto"),
        PriceTick::new(TickKind::Drop, "20% off on Amul Butter on BigBasket"),
        PriceTick::new(TickKind::Flash, "Flash Sale: Coke Zero at ₹30"),
        PriceTick::new(TickKind::Drop, "Potatoes lowest price in 3 days"),
    ],
    mock_results: &[
        ResultRecord {
            original_price: Some("₹520"),
            badge: Some("Best Price"),
            ..ResultRecord::new("BigBasket", "₹425", 4.5, "Today, 6 PM")
        },
        ResultRecord::new("Blinkit", "₹449", 4.3, "10 mins"),
        ResultRecord {
            original_price: Some("₹500"),
            badge: Some("Fastest"),
            ..ResultRecord::new("Zepto", "₹459", 4.2, "8 mins")
        },
        ResultRecord::new("JioMart", "₹470", 4.0, "Tomorrow"),
    ],
    subcategories: &[
        Subcategory {
            items: &["Onion", "Potato", "Tomato", "Apple", "Banana"],
            ..Subcategory::plain("fruits-veggies", "Fruits & Vegetables", Icon::Produce)
        },
        Subcategory {
            items: &["Milk", "Curd", "Butter", "Cheese", "Paneer", "Eggs"],
            ..Subcategory::plain("dairy-eggs", "Dairy & Eggs", Icon::Dairy)
        },
        Subcategory {
            items: &["Rice", "Wheat", "Dal", "Flour"],
            ..Subcategory::plain("staples-grains", "Staples & Grains", Icon::Grains)
        },
        Subcategory {
            items: &["Oil", "Ghee", "Spices", "Salt", "Sugar"],
            ..Subcategory::plain("cooking-essentials", "Cooking Essentials", Icon::Cooking)
        },
        Subcategory {
            items: &["Chips", "Biscuits", "Juice", "Soft Drinks"],
            ..Subcategory::plain("snacks-beverages", "Snacks & Beverages", Icon::Snacks)
        },
        Subcategory {
            items: &["Detergent", "Soap", "Floor Cleaner"],
            ..Subcategory::plain("household-cleaning", "Household & Cleaning", Icon::Cleaning)
        },
    ],
};

const COSMETICS: Category = Category {
    id: CategoryId::Cosmetics,
    label: "Cosmetics — Premium & Elegant",
    emoji: "💄",
    description: "Compare premium cosmetic prices from verified sources",
    hero_text: "Discover premium beauty products with product trust you can rely on.",
    theme: "blush-lavender",
    search_placeholder: "Search for makeup, skincare or brand...",
    demo_query: "Maybelline Fit Me Foundation",
    ticker: &[],
    mock_results: &[
        ResultRecord {
            original_price: Some("₹550"),
            badge: Some("Best Price"),
            ..ResultRecord::new("Nykaa", "₹399", 4.6, "2-3 days")
        },
        ResultRecord::new("Amazon", "₹425", 4.4, "Tomorrow"),
        ResultRecord {
            original_price: Some("₹550"),
            ..ResultRecord::new("Flipkart", "₹449", 4.3, "2 days")
        },
        ResultRecord::new("Myntra", "₹475", 4.5, "3-4 days"),
    ],
    subcategories: &[
        Subcategory {
            items: &["Face Wash", "Moisturizer", "Sunscreen", "Serum", "Face Mask"],
            ..Subcategory::plain("skincare", "Skincare", Icon::Skincare)
        },
        Subcategory {
            items: &["Foundation", "Lipstick", "Mascara", "Eyeliner", "Compact"],
            ..Subcategory::plain("makeup", "Makeup", Icon::Makeup)
        },
        Subcategory {
            items: &["Shampoo", "Conditioner", "Hair Oil", "Hair Serum", "Hair Mask"],
            ..Subcategory::plain("haircare", "Haircare", Icon::Haircare)
        },
        Subcategory {
            items: &["Body Lotion", "Deodorant", "Body Wash", "Hand Cream"],
            ..Subcategory::plain("personal-care", "Personal Care", Icon::PersonalCare)
        },
        Subcategory {
            items: &["Perfume", "Body Mist", "Eau de Toilette", "Cologne"],
            ..Subcategory::plain("fragrances", "Fragrances", Icon::Fragrance)
        },
        Subcategory {
            items: &["Makeup Brushes", "Sponges", "Tweezers", "Eyelash Curler"],
            ..Subcategory::plain("beauty-tools", "Beauty Tools & Accessories", Icon::BeautyTools)
        },
    ],
};

const TRANSPORT: Category = Category {
    id: CategoryId::Transport,
    label: "Transport — Smart & Reliable",
    emoji: "🚕",
    description: "Compare smart transport fares with reliable blue theme",
    hero_text: "Make smart transportation decisions by comparing fares and routes.",
    theme: "sky-blue",
    search_placeholder: "Enter pickup and destination...",
    demo_query: "Connaught Place → IGI Airport",
    ticker: &[],
    mock_results: &[
        ResultRecord {
            badge: Some("Cheapest"),
            ..ResultRecord::new("Ola", "₹320", 4.2, "4 min away")
        },
        ResultRecord {
            badge: Some("Nearest"),
            ..ResultRecord::new("Uber", "₹345", 4.5, "2 min away")
        },
        ResultRecord::new("Rapido", "₹280", 4.0, "6 min away"),
        ResultRecord::new("InDrive", "₹310", 3.9, "5 min away"),
    ],
    subcategories: &[
        Subcategory {
            tag: Some("Fastest"),
            ..Subcategory::plain("bike", "Bike Rides", Icon::Bike)
        },
        Subcategory {
            tag: Some("Cheapest"),
            ..Subcategory::plain("auto", "Auto Rickshaw", Icon::Auto)
        },
        Subcategory {
            options: &["Mini", "Sedan", "SUV"],
            ..Subcategory::plain("cab", "Cab", Icon::Car)
        },
        Subcategory {
            tag: Some("Eco"),
            ..Subcategory::plain("pool", "Shared Rides / Pool", Icon::Pool)
        },
        Subcategory::plain("intercity", "Intercity Travel", Icon::Intercity),
        Subcategory {
            options: &["Hourly", "Daily"],
            ..Subcategory::plain("rentals", "Rentals", Icon::Rental)
        },
    ],
};

const MEDICINES: Category = Category {
    id: CategoryId::Medicines,
    label: "Medicines — Calm & Safe",
    emoji: "💊",
    description: "Compare medicine prices from verified pharmacies",
    hero_text: "Find affordable medicines, because health decisions deserve trust and peace of mind.",
    theme: "calm-teal",
    search_placeholder: "Search for medicines or health products...",
    demo_query: "Dolo 650mg (Strip of 15)",
    ticker: &[],
    mock_results: &[
        ResultRecord {
            original_price: Some("₹35"),
            badge: Some("Best Price"),
            ..ResultRecord::new("PharmEasy", "₹28", 4.4, "Tomorrow")
        },
        ResultRecord::new("1mg", "₹30", 4.5, "Same Day"),
        ResultRecord {
            original_price: Some("₹35"),
            ..ResultRecord::new("Netmeds", "₹31", 4.2, "2 days")
        },
        ResultRecord {
            badge: Some("Trusted"),
            ..ResultRecord::new("Apollo 24|7", "₹33", 4.6, "Today")
        },
    ],
    subcategories: &[
        Subcategory {
            items: &["Antibiotics", "Pain Relief", "Fever Medicine", "Cough Syrup"],
            badge_text: Some("Prescription Required"),
            ..Subcategory::plain("prescription", "Prescription Medicines", Icon::Pill)
        },
        Subcategory {
            items: &["Generic Paracetamol", "Generic Ibuprofen", "Generic Metformin"],
            badge_text: Some("Save up to 70%"),
            highlight: true,
            ..Subcategory::plain("generic", "Generic Alternatives", Icon::Generic)
        },
        Subcategory {
            items: &["Diabetes", "BP", "Thyroid", "Cholesterol"],
            options: &["Diabetes", "BP", "Thyroid"],
            ..Subcategory::plain("chronic", "Chronic Care", Icon::Heart)
        },
        Subcategory {
            items: &["Multivitamins", "Vitamin C", "Vitamin D", "Omega-3", "Immunity Boosters"],
            ..Subcategory::plain("wellness", "Wellness & Immunity", Icon::Wellness)
        },
        Subcategory {
            items: &["Bandages", "Thermometer", "BP Monitor", "Glucometer", "Antiseptic"],
            ..Subcategory::plain("first-aid", "First Aid & Medical Devices", Icon::FirstAid)
        },
        Subcategory {
            items: &["Baby Care", "Women's Health", "Senior Care", "Maternity Products"],
            ..Subcategory::plain("baby-women", "Baby, Women & Senior Care", Icon::Baby)
        },
    ],
};

const SHOPPING: Category = Category {
    id: CategoryId::Shopping,
    label: "Shopping — Warm & Versatile",
    emoji: "🛍",
    description: "Compare shopping prices across platforms with warm peach theme",
    hero_text: "Shop smarter and find the best deals across all categories.",
    theme: "warm-peach",
    search_placeholder: "Search for products or paste links...",
    demo_query: "Sony WH-1000XM5 Headphones",
    ticker: &[],
    mock_results: &[
        ResultRecord {
            original_price: Some("₹29,990"),
            badge: Some("Best Price"),
            ..ResultRecord::new("Amazon", "₹22,990", 4.7, "Tomorrow")
        },
        ResultRecord::new("Flipkart", "₹23,499", 4.6, "2 days"),
        ResultRecord {
            original_price: Some("₹29,990"),
            ..ResultRecord::new("Croma", "₹24,990", 4.5, "3-5 days")
        },
        ResultRecord::new("Reliance Digital", "₹25,490", 4.4, "4-6 days"),
    ],
    subcategories: &[
        Subcategory {
            items: &["T-Shirts", "Jeans", "Dresses", "Jackets", "Ethnic Wear"],
            ..Subcategory::plain("fashion", "Fashion & Apparel", Icon::Fashion)
        },
        Subcategory {
            items: &["Mobile Phones", "Earphones", "Smart Watches", "Laptops", "Tablets"],
            ..Subcategory::plain("electronics", "Electronics & Gadgets", Icon::Electronics)
        },
        Subcategory {
            items: &["Cookware", "Appliances", "Bedding", "Furniture", "Decor"],
            ..Subcategory::plain("home-kitchen", "Home & Kitchen", Icon::Home)
        },
        Subcategory {
            items: &["Sneakers", "Formal Shoes", "Sandals", "Bags", "Belts"],
            ..Subcategory::plain("footwear", "Footwear & Accessories", Icon::Footwear)
        },
        Subcategory {
            items: &["Skincare", "Haircare", "Fragrances", "Grooming"],
            ..Subcategory::plain("beauty-personal", "Beauty & Personal Care", Icon::Beauty)
        },
        Subcategory {
            items: &["Fitness Equipment", "Sports Shoes", "Yoga Mats", "Sportswear"],
            ..Subcategory::plain("sports", "Sports", Icon::Sports)
        },
        Subcategory {
            items: &["Fiction", "Non-Fiction", "Stationery", "Toys", "Games"],
            ..Subcategory::plain("books", "Books & More", Icon::Books)
        },
    ],
};
