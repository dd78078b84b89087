// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpMessage};
use anyhow::{Context, Result};
use controller_shared::settings::Logging;
use tracing::field::{display, Empty};
use tracing::Span;
use tracing_actix_web::{RequestId, RootSpanBuilder};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Installs the global subscriber
///
/// `RUST_LOG` is combined with the configured default directives. Records emitted through
/// the `log` crate end up in the same output.
pub fn init(settings: &Logging) -> Result<()> {
    let filter = settings
        .default_directives
        .iter()
        .try_fold(EnvFilter::from_default_env(), |filter, directive| {
            let directive = directive
                .parse::<Directive>()
                .with_context(|| format!("Invalid logging directive `{directive}`"))?;

            Ok::<_, anyhow::Error>(filter.add_directive(directive))
        })?;

    Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(())
}

/// Root span of every HTTP request, without any exporter specific fields
pub struct ReducedSpanBuilder;

impl RootSpanBuilder for ReducedSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> Span {
        let route = request.match_pattern().unwrap_or_else(|| "default".into());

        let request_id = request
            .extensions()
            .get::<RequestId>()
            .map(ToString::to_string)
            .unwrap_or_default();

        tracing::info_span!(
            "HTTP request",
            http.method = %request.method(),
            http.route = %route,
            http.target = %request.uri(),
            http.status_code = Empty,
            request_id = %request_id,
            exception.message = Empty,
            exception.details = Empty,
        )
    }

    fn on_request_end<B>(span: Span, outcome: &Result<ServiceResponse<B>, Error>) {
        let error = match outcome {
            Ok(response) => match response.response().error() {
                Some(error) => error,
                None => {
                    record_status(&span, response.status());
                    return;
                }
            },
            Err(error) => error,
        };

        let response_error = error.as_response_error();

        span.record("exception.message", display(response_error));
        span.record("exception.details", tracing::field::debug(response_error));
        record_status(&span, response_error.status_code());
    }
}

fn record_status(span: &Span, status: StatusCode) {
    span.record("http.status_code", status.as_u16());
}
