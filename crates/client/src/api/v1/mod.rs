// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::GuestbookClient;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use url::Url;

pub mod rsvp;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub body: String,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(error {}: {})", self.status, self.body)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Url error: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("Http error: {0}")]
    NonSuccess(HttpError),
}

pub(crate) async fn parse_json_response<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    if !response.status().is_success() {
        return Err(ApiError::NonSuccess(HttpError {
            status: response.status(),
            body: response.text().await?,
        }));
    }

    Ok(response.json::<T>().await?)
}

impl GuestbookClient {
    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}
