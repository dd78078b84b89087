// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use actix_web::dev::ServerHandle;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::{Context, Result};
use client::GuestbookClient;
use database::Db;
use std::net::Ipv4Addr;
use std::sync::Arc;
use url::Url;

/// Starts the guestbook API on a random local port
///
/// Returns a client pointed at the server and the handle to stop it.
pub fn run_server(db: Arc<Db>) -> Result<(GuestbookClient, ServerHandle)> {
    let db = Data::from(db);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(db.clone())
            .configure(guestbook_controller_core::api_config)
    })
    .workers(1)
    .bind((Ipv4Addr::LOCALHOST, 0))
    .context("Failed to bind test server")?;

    let address = server
        .addrs()
        .first()
        .copied()
        .context("Test server is not bound to any address")?;

    let server = server.disable_signals().run();
    let handle = server.handle();
    actix_rt::spawn(server);

    let base_url = Url::parse(&format!("http://{address}")).context("Invalid server url")?;

    Ok((GuestbookClient::new(base_url), handle))
}

pub fn setup_logging() -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
        .context("Failed to setup logging utility")
}
