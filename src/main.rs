#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use onecart::{CATALOG, LaunchOptions, run_app};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*; // <--- REQUIRED for .dyn_into()

// This keeps the WASM memory allocator from being stripped
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Reads `?category=..&q=..` from the page URL, percent-decoded by the browser.
#[cfg(target_arch = "wasm32")]
fn launch_from_url(window: &web_sys::Window) -> LaunchOptions {
    let search = window.location().search().unwrap_or_default();
    match web_sys::UrlSearchParams::new_with_str(&search) {
        Ok(params) => LaunchOptions::from_params(|key| params.get(key)),
        Err(_) => {
            log::warn!("Could not parse URL parameters '{}'", search);
            LaunchOptions::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    log::info!("OneCart+ starting in WASM mode...");
    if let Err(e) = CATALOG.validate() {
        log::error!("Catalog failed validation: {}", e);
    }

    // B. Setup for Web
    let web_options = eframe::WebOptions::default();

    let window = web_sys::window().ok_or("no global `window` exists")?;
    let launch = launch_from_url(&window);
    let document = window.document().ok_or("should have a document on window")?;

    // Find the canvas element by ID
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(|cc| Ok(run_app(cc, launch))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use onecart::Cli;
    use onecart::config::APP_STATE_PATH;
    use onecart::ui::config::UI_TEXT;
    use std::path::PathBuf;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Sanity-check the built-in catalog
    match CATALOG.validate() {
        Ok(()) => log::info!("Catalog ready: {} categories", CATALOG.categories().len()),
        Err(e) => log::error!("Catalog failed validation: {}", e),
    }

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    let launch = LaunchOptions::from(args);
    eframe::run_native(
        UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, launch))),
    )
}
