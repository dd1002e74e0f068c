// SPDX-License-Identifier: MIT OR Apache-2.0
//! OSMOS Showcase - desktop landing page
//!
//! A single-window marketing page for the OSMOS automation agency:
//! - Hero, approach, contact and footer sections
//! - A decorative "Lead Scraper & Outreach" pipeline animation
//!
//! ## Architecture
//!
//! The app is a winit event loop rendering an egui page through wgpu. All
//! page state lives in [`page::ShowcasePage`] and is torn down with the
//! window; nothing runs outside the frame loop.

mod app;
mod config;
mod header;
mod page;
mod reveal;
mod section_types;
mod sections;
mod theme;

use app::ShowcaseApp;
use config::ShowcaseConfig;
use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("osmos_showcase_app=debug".parse().unwrap())
        .add_directive("wgpu=warn".parse().unwrap())
        .add_directive("naga=warn".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting OSMOS Showcase v{}", env!("CARGO_PKG_VERSION"));

    let config = ShowcaseConfig::load_or_default(Path::new(config::CONFIG_FILE_NAME));

    if let Err(e) = ShowcaseApp::run(config) {
        tracing::error!("Showcase crashed: {e}");
        std::process::exit(1);
    }
}
