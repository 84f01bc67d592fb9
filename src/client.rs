use crate::{errors::DocmarksError, Settings};
use anyhow::anyhow;
use async_trait::async_trait;
use log::{debug, trace};
use parking_lot::Mutex;
use reqwest::{Client as ReqwestClient, Url};
use std::{collections::HashMap, sync::Arc, time::Duration};

/// A trait to fetch websites from a real or mock client.
#[async_trait]
pub trait Fetch: Clone {
    /// Fetch content of a website as HTML.
    async fn fetch(&self, url: &Url) -> Result<String, DocmarksError>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// The request timeout in milliseconds.
    pub request_timeout: u64,
    /// The user agent sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(settings: &Settings) -> Self {
        Self {
            request_timeout: settings.request_timeout,
            user_agent: settings.user_agent.clone(),
        }
    }
}

/// A client to fetch websites.
#[derive(Debug, Clone)]
pub struct Client {
    client: ReqwestClient,
}

impl Client {
    pub fn new(config: &ClientConfig) -> Result<Self, DocmarksError> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_millis(config.request_timeout))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(DocmarksError::CreateClient)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for Client {
    async fn fetch(&self, url: &Url) -> Result<String, DocmarksError> {
        debug!("Fetch website ({url})");

        let response = self
            .client
            .get(url.to_owned())
            .send()
            .await
            .map_err(DocmarksError::FetchWebsite)?;

        trace!("Fetched website ({url}) with status {}", response.status());

        if response.status().is_success() {
            let html = response
                .text()
                .await
                .map_err(DocmarksError::FetchWebsite)?;
            Ok(html)
        } else {
            Err(DocmarksError::HttpStatus {
                status: response.status().to_string(),
                url: url.to_string(),
            })
        }
    }
}

/// A mock client to fetch websites used in testing.
#[derive(Debug, Default, Clone)]
pub struct MockClient {
    /// The mocked HTML content per url.
    client_map: Arc<Mutex<HashMap<Url, String>>>,
}

impl MockClient {
    pub fn new() -> Self {
        let client_map = Arc::new(Mutex::new(HashMap::new()));
        Self { client_map }
    }

    pub fn add(&self, html: String, url: &Url) {
        let mut client_map = self.client_map.lock();
        client_map.insert(url.clone(), html);
    }

    pub fn get(&self, url: &Url) -> Option<String> {
        let client_map = self.client_map.lock();
        client_map.get(url).map(|content| content.to_owned())
    }
}

#[async_trait]
impl Fetch for MockClient {
    async fn fetch(&self, url: &Url) -> Result<String, DocmarksError> {
        let html = self
            .get(url)
            .ok_or(anyhow!("Can't fetch website ({url})"))?;
        Ok(html)
    }
}
