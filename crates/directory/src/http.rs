use std::time::Duration;

use async_trait::async_trait;
use brigade_primitives::BriefCustomer;
use brigade_typeahead::{CustomerSearch, SearchError};
use tracing::debug;
use url::Url;

use crate::error::DirectoryError;

/// Quick-search endpoint, relative to the API base URL.
pub const SEARCH_PATH: &str = "api/v1/customers/search";

/// Request timeout of the client built by [`HttpCustomerSearch::new`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Customer search against the back-office REST API.
#[derive(Clone)]
pub struct HttpCustomerSearch {
	client: reqwest::Client,
	endpoint: Url,
	token: Option<String>,
}

impl std::fmt::Debug for HttpCustomerSearch {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HttpCustomerSearch")
			.field("endpoint", &self.endpoint.as_str())
			.field("token", &self.token.as_ref().map(|_| "<redacted>"))
			.finish()
	}
}

impl HttpCustomerSearch {
	/// Builds a client for the API at `base_url`, sending `token` as a bearer credential.
	pub fn new(base_url: &str, token: Option<String>) -> Result<Self, DirectoryError> {
		Self::with_client(reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?, base_url, token)
	}

	/// Like [`Self::new`] with a caller-configured client (proxies, timeouts, TLS roots).
	pub fn with_client(client: reqwest::Client, base_url: &str, token: Option<String>) -> Result<Self, DirectoryError> {
		Ok(Self {
			client,
			endpoint: search_endpoint(base_url)?,
			token,
		})
	}

	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}
}

fn search_endpoint(base_url: &str) -> Result<Url, url::ParseError> {
	let mut base = Url::parse(base_url)?;
	if !base.path().ends_with('/') {
		let path = format!("{}/", base.path());
		base.set_path(&path);
	}
	base.join(SEARCH_PATH)
}

#[async_trait]
impl CustomerSearch for HttpCustomerSearch {
	async fn search(&self, text: &str) -> Result<Vec<BriefCustomer>, SearchError> {
		let mut request = self.client.get(self.endpoint.clone()).query(&[("q", text)]);
		if let Some(token) = &self.token {
			request = request.bearer_auth(token);
		}

		let response = request.send().await.map_err(|e| SearchError::Transport(e.to_string()))?;
		let status = response.status();
		debug!(status = status.as_u16(), "directory.http_search");
		if !status.is_success() {
			return Err(SearchError::Status { status: status.as_u16() });
		}

		response
			.json::<Vec<BriefCustomer>>()
			.await
			.map_err(|e| SearchError::Decode(e.to_string()))
	}
}
