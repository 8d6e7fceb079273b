//! Client context for communicating with the backend.

use crate::error::{WebError, WebResult};
use reqwasm::http::Response;
use tango_api::{request as req, response as res};
use tango_core::{Flashcard, Language};

#[derive(Clone, Copy)]
pub struct Client {}

/// Non-API methods
impl Client {
    pub fn new() -> Self {
        Self {}
    }

    async fn assert_success(&self, res: &Response) -> eyre::Result<()> {
        match res.status() {
            100..=399 => Ok(()),
            code => {
                let bytes = res.binary().await.unwrap_or_default();
                let body = match serde_json::from_slice::<res::Error>(&bytes) {
                    Ok(error) => error.message,
                    Err(_) => String::from_utf8_lossy(bytes.as_slice()).into_owned(),
                };
                Err(eyre::eyre!("Request failed: HTTP {code} {body}"))
            }
        }
    }
}

/// API methods
impl Client {
    /// Requests a generated study set for a keyword.
    ///
    /// One request, one round trip: there is no retry and no way to
    /// abort a request once it has been issued.
    pub async fn generate(&self, keyword: &str, language: Language) -> WebResult<Flashcard> {
        tracing::info!("Generating study material for {keyword} in {language}");

        let generate = req::Generate {
            keyword: keyword.into(),
            language,
        };
        let json = serde_json::to_string(&generate).map_err(WebError::from)?;
        let res = reqwasm::http::Request::post("/api/generate")
            .body(json)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(WebError::from)?;
        self.assert_success(&res).await?;
        let flashcard = res.json().await.map_err(WebError::from)?;

        tracing::info!("Generated study material for {keyword}");
        Ok(flashcard)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
