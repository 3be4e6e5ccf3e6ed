//! Judging Server
//!
//! Serves training scenarios and grades learner answers over HTTP,
//! with an interactive terminal drill over the same [`API`].
//!
//! ## Routes
//!
//! - `GET /` — service banner
//! - `GET /health` — liveness and scenario count
//! - `GET /api/v1/questions?mode=` — a scenario, without its answer
//! - `GET /api/v1/questions/next/{id}?mode=` — a different scenario of the mode
//! - `POST /api/v1/judge` — grade an answer
//! - `POST /api/v1/explain` — rationale only
mod api;
mod cli;
mod config;
mod error;
mod query;

pub mod handlers;

pub use api::*;
pub use cli::*;
pub use config::*;
pub use error::*;
pub use query::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

/// Mounts every route; shared by [`run`] and the integration tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::banner))
        .route("/health", web::get().to(handlers::health))
        .service(
            web::scope("/api/v1")
                .route("/questions", web::get().to(handlers::question))
                .route("/questions/next/{id}", web::get().to(handlers::next))
                .route("/judge", web::post().to(handlers::judge))
                .route("/explain", web::post().to(handlers::explain)),
        );
}

#[rustfmt::skip]
pub async fn run(config: Config) -> anyhow::Result<()> {
    let store = Arc::new(config.deck.store()?);
    for (mode, n) in store.modes() {
        log::info!("{:<14} {} scenarios", mode, n);
    }
    log::info!("selection policy: {}", store.policy());
    let api = web::Data::new(API::from(store));
    log::info!("starting judging server on {}", config.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(api.clone())
            .configure(routes)
    })
    .workers(config.workers)
    .bind(config.bind.as_str())?
    .run()
    .await?;
    Ok(())
}
