//! User-facing strings, gathered in one place.

pub struct UiText {
    pub app_title: &'static str,
    pub brand: &'static str,
    pub brand_plus: &'static str,
    pub switch_category: &'static str,

    // Dashboard
    pub dashboard_welcome: &'static str,
    pub dashboard_heading: &'static str,
    pub dashboard_subheading: &'static str,

    // Search section
    pub search_button: &'static str,
    pub compare_fares_button: &'static str,
    pub route_from_hint: &'static str,
    pub route_to_hint: &'static str,
    pub paste_link_hint: &'static str,
    pub demo_prefix: &'static str,

    // Browse
    pub browse_hint: &'static str,
    pub back_to_prefix: &'static str,
    pub option_picker_prefix: &'static str,
    pub option_picker_suffix: &'static str,
    pub quick_picks: &'static str,
    pub verified_brands: &'static str,
    pub verified_pharmacies: &'static str,

    // Prompt (no subcategories)
    pub prompt_heading_products: &'static str,
    pub prompt_heading_fares: &'static str,
    pub prompt_body_products: &'static str,
    pub prompt_body_fares: &'static str,

    // Searching
    pub searching_products: &'static str,
    pub searching_fares: &'static str,

    // Results
    pub results_for_prefix: &'static str,
    pub results_found_suffix: &'static str,
    pub back_to_browse: &'static str,
    pub sort_by: &'static str,
    pub price_comparison: &'static str,
    pub fare_comparison: &'static str,
    pub buy: &'static str,
    pub book: &'static str,
    pub winner_heading: &'static str,
    pub save_prefix: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "OneCart+ — Compare before you cart",
    brand: "OneCart",
    brand_plus: "+",
    switch_category: "🔀 Switch Category",

    dashboard_welcome: "Welcome Back",
    dashboard_heading: "What would you like to compare today?",
    dashboard_subheading: "Pick a category to get started on your smart shopping journey",

    search_button: "Search Now",
    compare_fares_button: "Compare Fares",
    route_from_hint: "From: enter pickup location",
    route_to_hint: "To: enter destination",
    paste_link_hint: "🔗 Or paste a product link to compare instantly",
    demo_prefix: "Try demo: ",

    browse_hint: "Select a category below to quickly compare prices",
    back_to_prefix: "← Back to ",
    option_picker_prefix: "Select ",
    option_picker_suffix: " Type",
    quick_picks: "Quick picks:",
    verified_brands: "✔ Verified Brands Only",
    verified_pharmacies: "✔ Verified Pharmacies",

    prompt_heading_products: "Ready to compare prices?",
    prompt_heading_fares: "Ready to find the best fares?",
    prompt_body_products: "Enter a product name or paste a link to get started",
    prompt_body_fares: "Enter your pickup and destination locations above",

    searching_products: "Comparing prices across platforms...",
    searching_fares: "Finding best fares...",

    results_for_prefix: "Results for ",
    results_found_suffix: " options for you",
    back_to_browse: "Back to Browse",
    sort_by: "Sort by",
    price_comparison: "Price Comparison",
    fare_comparison: "Fare Comparison",
    buy: "Buy",
    book: "Book",
    winner_heading: "🏆 Best pick",
    save_prefix: "Save ₹",
};
