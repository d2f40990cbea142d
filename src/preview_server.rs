// src/preview_server.rs

use crate::byte_cache::VideoLoader;
use crate::file_utils::VideoFile;
use crate::page::{render_page, RenderPlan};
use crate::playback_options::PlaybackOptions;
use crate::ui::render_html;
use actix_web::{
    http::header::ContentType, middleware::Logger, web, App, HttpResponse, HttpServer, Result,
};
use log::{error, info};
use std::sync::Arc;

/// State shared by every request handler.
pub struct PreviewState {
    pub videos: [VideoFile; 2],
    pub loader: Arc<dyn VideoLoader>,
}

impl PreviewState {
    pub fn new(videos: [VideoFile; 2], loader: Arc<dyn VideoLoader>) -> Self {
        Self { videos, loader }
    }
}

/// Runs a render pass on the blocking thread pool.
async fn run_render_pass(
    state: web::Data<PreviewState>,
    options: PlaybackOptions,
) -> Result<RenderPlan, actix_web::Error> {
    let plan = web::block(move || render_page(&state.videos, &options, state.loader.as_ref()))
        .await?
        .map_err(|e| {
            error!("Render pass failed: {}", e);
            e
        })?;
    Ok(plan)
}

/// HTTP handler for `/`: the preview page.
/// A missing file still answers 200; the error banner is part of the page.
async fn index(
    state: web::Data<PreviewState>,
    query: web::Query<PlaybackOptions>,
) -> Result<HttpResponse, actix_web::Error> {
    let plan = run_render_pass(state, query.into_inner()).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_html(&plan)))
}

/// HTTP handler for `/plan.json`: the same render pass, summarized as JSON.
async fn plan_json(
    state: web::Data<PreviewState>,
    query: web::Query<PlaybackOptions>,
) -> Result<HttpResponse, actix_web::Error> {
    let plan = run_render_pass(state, query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(plan.summary()))
}

/// HTTP handler for `/media/{slot}`.
/// Serves the whole cached file for slot 1 or 2.
async fn media(
    state: web::Data<PreviewState>,
    slot: web::Path<u8>,
) -> Result<HttpResponse, actix_web::Error> {
    let slot = slot.into_inner();
    let video = match state.videos.iter().find(|video| video.slot == slot) {
        Some(video) => video.clone(),
        None => return Ok(HttpResponse::NotFound().body("Unknown video slot")),
    };
    if !video.exists() {
        return Ok(HttpResponse::NotFound().body(format!("{} is missing", video.file_name())));
    }

    let loader = Arc::clone(&state.loader);
    let path = video.path.clone();
    let content = web::block(move || loader.get_or_load(&path)).await??;
    let mime = mime_guess::from_path(&video.path).first_or_octet_stream();

    Ok(HttpResponse::Ok()
        .content_type(mime.to_string())
        .body(content))
}

/// Registers the preview routes. Shared by the server and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/plan.json", web::get().to(plan_json))
        .route("/media/{slot}", web::get().to(media));
}

/// Configures and starts the Actix web server for the preview page.
///
/// # Arguments
///
/// * `host` - The host address to bind the server to.
/// * `port` - The port number to bind the server to.
/// * `app_state` - The shared `PreviewState` with the video references and byte cache.
///
/// # Returns
///
/// A `std::io::Result` containing the Actix server instance if binding is successful.
pub fn run_server(
    host: String,
    port: u16,
    app_state: web::Data<PreviewState>,
) -> std::io::Result<actix_web::dev::Server> {
    info!("Binding preview server to {}:{}", host, port);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(configure)
    })
    .workers(1) // One local viewer; more workers only duplicate idle threads.
    .bind((host, port))?
    .run();

    Ok(server)
}
