use crate::fetcher::{
    errors::FetchError,
    pipeline::process_response,
    source::ListingSource,
    types::{ListingQuery, PageResponse},
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const USER_AGENT: &str = "UnlistedSearch/0.1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Process-wide client; every listing request shares its connection pool.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(DEFAULT_TIMEOUT)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .default_headers({
            let mut headers = header::HeaderMap::new();
            headers.insert(
                header::ACCEPT,
                header::HeaderValue::from_static(
                    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                ),
            );
            headers
        })
        .build()
        .expect("Failed to build HTTP client")
});

pub fn get_client() -> &'static Client {
    &HTTP_CLIENT
}

/// Fetches pages of the external listing endpoint.
#[derive(Debug, Clone)]
pub struct HttpListingClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpListingClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client: get_client().clone(),
            base_url: Url::parse(base_url)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Per-request timeout, overriding the shared client's default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[instrument(skip(self, query), fields(url = %self.base_url))]
    pub async fn fetch_page(
        &self,
        query: &ListingQuery,
        page: u32,
    ) -> Result<PageResponse, FetchError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .query(&query.params(page))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let final_url = response.url().clone();
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Http { status });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
            return Err(FetchError::UnsupportedContentType(content_type));
        }

        let body_bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Io(e.to_string()))?;

        // Content-Length may be missing or wrong
        if body_bytes.len() as u64 > MAX_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
        }
        if body_bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(FetchError::EmptyBody);
        }

        let bytes = body_bytes.len();
        let page = process_response(final_url, status, body_bytes, &content_type);
        debug!(
            bytes,
            url = %page.url_final,
            charset = ?page.charset,
            fetched_at = %page.fetched_at,
            "fetched listing page"
        );
        Ok(page)
    }
}

#[async_trait]
impl ListingSource for HttpListingClient {
    async fn fetch_listing(&self, query: &ListingQuery, page: u32) -> Result<String, FetchError> {
        self.fetch_page(query, page).await.map(|resp| resp.body_utf8)
    }
}
