// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Core library of the *Wedding Guestbook*
//!
//! # Example
//!
//! ```no_run
//! use guestbook_controller_core::Controller;
//! use anyhow::Result;
//!
//! #[actix_web::main]
//! async fn main()  {
//!     guestbook_controller_core::try_or_exit(run()).await;
//! }
//!
//! async fn run() -> Result<()> {
//!    if let Some(controller) = Controller::create("Wedding Guestbook").await? {
//!         controller.run().await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::api::v1::response::{json_error_handler, not_found};
use crate::settings::Settings;
use crate::trace::ReducedSpanBuilder;
use actix_cors::Cors;
use actix_web::http::{header, Method};
use actix_web::web::Data;
use actix_web::{web, App, HttpServer, Scope};
use anyhow::{Context, Result};
use database::Db;
use std::net::Ipv6Addr;
use std::sync::Arc;
use tokio::signal::ctrl_c;
use tokio::signal::unix::{signal, SignalKind};
use tracing_actix_web::TracingLogger;

#[cfg(not(doc))]
mod api;
#[cfg(doc)]
pub mod api;

mod cli;
mod trace;

pub mod settings;

#[derive(Debug, thiserror::Error)]
#[error("Blocking thread has panicked")]
pub struct BlockingError;

/// Custom version of `actix_web::web::block` which retains the current tracing span
pub async fn block<F, R>(f: F) -> Result<R, BlockingError>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let span = tracing::Span::current();

    let fut = actix_rt::task::spawn_blocking(move || span.in_scope(f));

    fut.await.map_err(|_| BlockingError)
}

/// Wrapper of the main function. Correctly outputs the error to the logging utility or stderr.
pub async fn try_or_exit<T, F>(f: F) -> T
where
    F: std::future::Future<Output = Result<T>>,
{
    match f.await {
        Ok(ok) => ok,
        Err(err) => {
            if log::log_enabled!(log::Level::Error) {
                log::error!("Crashed with error: {:?}", err);
            } else {
                eprintln!("Crashed with error: {err:?}");
            }

            std::process::exit(-1);
        }
    }
}

/// Controller struct representation containing all fields required to drive the guestbook
pub struct Controller {
    /// Settings loaded on [Controller::create]
    pub startup_settings: Arc<Settings>,

    db: Arc<Db>,
}

impl Controller {
    /// Tries to create a controller from CLI arguments and then the settings.
    ///
    /// This can return Ok(None) which would indicate that the controller executed a CLI
    /// subprogram (e.g. `migrate-db`) and must now exit.
    ///
    /// Otherwise it will return itself which can be run using [`Controller::run`]
    pub async fn create(program_name: &str) -> Result<Option<Self>> {
        let args = cli::parse_args().await?;

        // Some args run commands by them self and thus should exit here
        if !args.controller_should_start() {
            return Ok(None);
        }

        let settings = settings::load_settings(&args)?;

        trace::init(&settings.logging)?;

        log::info!("Starting {}", program_name);

        let controller = Self::init(settings).await?;

        Ok(Some(controller))
    }

    #[tracing::instrument(err, skip(settings))]
    async fn init(settings: Settings) -> Result<Self> {
        let settings = Arc::new(settings);

        db_storage::migrations::migrate_from_url(&settings.database.url)
            .await
            .context("Failed to migrate database")?;

        // Connect to postgres
        let db = Arc::new(Db::connect(&settings.database).context("Failed to connect to database")?);

        Ok(Self {
            startup_settings: settings,
            db,
        })
    }

    /// Runs the controller until a fatal error occurred or a shutdown is requested (e.g. SIGTERM).
    pub async fn run(self) -> Result<()> {
        // Start HTTP Server
        let http_server = {
            let cors = self.startup_settings.http.cors.clone();
            let db = Data::from(self.db.clone());

            HttpServer::new(move || {
                let cors = setup_cors(&cors);

                App::new()
                    .wrap(TracingLogger::<ReducedSpanBuilder>::new())
                    .wrap(cors)
                    .app_data(db.clone())
                    .configure(api_config)
            })
        };

        let address = (Ipv6Addr::UNSPECIFIED, self.startup_settings.http.port);

        let http_server = http_server.bind(address).with_context(|| {
            format!("Failed to bind http server to {}:{}", address.0, address.1)
        })?;

        log::info!("Startup finished");

        let http_server = http_server.disable_signals().run();
        let http_server_handle = http_server.handle();

        let mut terminate_signal =
            signal(SignalKind::terminate()).context("Failed to register SIGTERM signal handler")?;

        actix_rt::spawn(http_server);

        // Wait for either SIGINT or SIGTERM
        tokio::select! {
            _ = ctrl_c() => {
                log::info!("Got interrupt signal, exiting");
            }
            _ = terminate_signal.recv() => {
                log::info!("Got termination signal, exiting");
            }
        }

        // ==== Begin shutdown sequence ====

        // Stop the HTTP server, in-flight requests are completed first
        http_server_handle.stop(true).await;

        log::info!("HTTP server stopped, goodbye!");

        Ok(())
    }
}

/// Registers the guestbook API and its JSON error handling on an actix-web app
///
/// The app must provide a [`Db`] as app data.
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(api_scope())
        .default_service(web::to(not_found));
}

fn api_scope() -> Scope {
    // the latest version contains the root services
    web::scope("/api")
        .service(api::v1::rsvp::get_rsvps)
        .service(api::v1::rsvp::post_rsvp)
}

fn setup_cors(settings: &settings::HttpCors) -> Cors {
    let mut cors = Cors::default();

    for origin in &settings.allowed_origin {
        cors = cors.allowed_origin(origin)
    }

    cors.allowed_header(header::CONTENT_TYPE)
        .allowed_methods([Method::GET, Method::POST])
}
