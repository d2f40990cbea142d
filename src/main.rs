// src/main.rs

use actix_web::web;
use clap::Parser;
use local_ip_address::local_ip;
use log::{error, info, warn};
use qrcode::render::unicode;
use qrcode::QrCode;
use std::process;
use std::sync::Arc;

// Module declarations
mod byte_cache;
mod cli;
mod config;
mod file_utils;
mod page;
mod playback_options;
mod preview_server;
mod ui;

// Crate imports for convenience
use crate::byte_cache::CachedLoader;
use crate::cli::Cli;
use crate::file_utils::{default_videos_dir, expand_videos_dir, find_missing, resolve_video_files};
use crate::preview_server::{run_server, PreviewState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run_app().await {
        error!("{}", err);
        eprintln!("\nApplication Error: {}", err);
        process::exit(1);
    }
}

async fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    let cli_args = Cli::parse();

    let videos_dir = match cli_args.videos_dir.as_deref() {
        Some(raw) => expand_videos_dir(raw)?,
        None => default_videos_dir()?,
    };
    let videos = resolve_video_files(&videos_dir);
    for video in &videos {
        info!("{}: {}", video.label, video.path.display());
    }

    // Every request re-checks the files, so a missing one is only a warning here.
    let missing = find_missing(&videos);
    if !missing.is_empty() {
        warn!(
            "Missing in '{}': {}. The page will show an error until they are added.",
            videos_dir.display(),
            missing.join(", ")
        );
    }

    let host = if cli_args.lan {
        match local_ip() {
            Ok(ip) => ip.to_string(),
            Err(e) => {
                warn!(
                    "Could not get local IP address: {}. Falling back to {}.",
                    e, cli_args.host
                );
                cli_args.host.clone()
            }
        }
    } else {
        cli_args.host.clone()
    };
    let page_url = format!("http://{}:{}/", host, cli_args.port);

    let state = web::Data::new(PreviewState::new(videos, Arc::new(CachedLoader::new())));
    let server = run_server(host, cli_args.port, state)?;
    println!("Video preview is running at {}", page_url);

    if cli_args.lan {
        if let Ok(code) = QrCode::new(page_url.as_bytes()) {
            println!(
                "Scan QR code to open the preview on another device:\n{}",
                code.render::<unicode::Dense1x2>().build()
            );
        }
    }

    if cli_args.open {
        if let Err(e) = open::that(&page_url) {
            warn!("Failed to open '{}' in the default browser: {}", page_url, e);
        }
    }

    // Runs until Ctrl-C; actix handles the signal and stops gracefully.
    server.await?;
    info!("Preview server stopped.");
    Ok(())
}
