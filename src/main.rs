#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod demo;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Connect - campus collaboration messaging
#[derive(Parser, Debug)]
#[command(name = "connect-desktop")]
#[command(about = "Connect - messaging client for the campus collaboration portal")]
struct Args {
    /// Profile name shown in the window title (handy when running
    /// several instances side by side)
    #[arg(short, long)]
    profile: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let title = match args.profile {
        Some(ref profile) => format!("Connect - {}", profile),
        None => "Connect".to_string(),
    };

    tracing::info!(title = %title, "starting desktop client");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 780.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
