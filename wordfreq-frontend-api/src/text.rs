use async_trait::async_trait;
use gloo_net::http::Request;

use wordfreq_core::TextSource;

use crate::{into_text, Error, Result};

/// Plain text document served at a fixed URL.
#[derive(Debug, Clone, Copy)]
pub struct TextApi {
    url: &'static str,
}

impl TextApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    pub async fn text(&self) -> Result<String> {
        log::debug!("Fetch text from {}", self.url);
        let response = Request::get(self.url).send().await?;
        into_text(response).await
    }
}

#[async_trait(?Send)]
impl TextSource for TextApi {
    type Error = Error;

    async fn fetch_text(&self) -> Result<String> {
        self.text().await
    }
}
