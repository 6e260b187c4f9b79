//! Client for the two catalog service endpoints.

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;

use bcs_model::{Book, Genre, SubmissionOutcome};

use crate::error::{ClientError, Result};

/// User agent string for service requests.
const USER_AGENT_VALUE: &str = concat!("book-catalog-studio/", env!("CARGO_PKG_VERSION"));

/// Wire shape of the genre listing response.
#[derive(Debug, Deserialize)]
struct GenreListing {
    genres: Vec<Genre>,
}

/// Client for the catalog listing and book creation services.
///
/// Built once with the service base URL; transport details (headers,
/// TLS) live here so the wizard never sees them.
#[derive(Debug, Clone)]
pub struct LibraryClient {
    client: reqwest::Client,
    base_url: String,
}

impl LibraryClient {
    /// Creates a client for the service rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the full genre catalog.
    ///
    /// Parameterless; fired once at startup. There is no retry here - a
    /// failure is the caller's explicit empty-catalog state.
    pub async fn fetch_genres(&self) -> Result<Vec<Genre>> {
        let url = format!("{}/genres", self.base_url);
        tracing::debug!(%url, "fetching genre catalog");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::BadListing(format!(
                "listing returned status {status}"
            )));
        }

        let listing: GenreListing = response.json().await?;
        Ok(listing.genres)
    }

    /// Submits a finished book to the creation service.
    ///
    /// The wizard only distinguishes 201 Created from everything else;
    /// other statuses and transport failures are folded into the
    /// corresponding [`SubmissionOutcome`] instead of an error, so the
    /// caller always gets a resolvable outcome.
    pub async fn create_book(&self, book: &Book) -> SubmissionOutcome {
        let url = format!("{}/books", self.base_url);
        tracing::debug!(%url, title = %book.information.title, "submitting book");

        match self.client.post(&url).json(book).send().await {
            Ok(response) if response.status() == StatusCode::CREATED => {
                SubmissionOutcome::Accepted
            }
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::warn!(status, "book creation was not accepted");
                SubmissionOutcome::Rejected { status }
            }
            Err(err) => {
                tracing::error!(error = %err, "book creation request failed");
                SubmissionOutcome::TransportError
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = LibraryClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080/api");
    }
}
