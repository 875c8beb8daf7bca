//! Typly - tabbed plain-text scratchpad
//!
//! Keeps a small set of text documents as tabs, auto-saves every keystroke
//! and imports or exports plain `.txt` files.

mod app;
mod controller;
mod core;
mod ui;

use app::TyplyApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Typly...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Typly"),
        ..Default::default()
    };

    eframe::run_native(
        "Typly",
        native_options,
        Box::new(|cc| Ok(Box::new(TyplyApp::new(cc)))),
    )
}
