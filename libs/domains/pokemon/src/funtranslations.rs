//! Description rewriting through the FunTranslations API.

use async_trait::async_trait;
use core_config::upstream::UpstreamConfig;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::client::{UpstreamClient, UpstreamResponse};
use crate::error::{PokemonError, PokemonResult};
use crate::models::TranslationStyle;

/// Rewrites free text in one of the supported styles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    async fn to_yoda(&self, text: &str) -> PokemonResult<String>;

    async fn to_shakespeare(&self, text: &str) -> PokemonResult<String>;
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TranslateResponse {
    contents: TranslateContents,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TranslateContents {
    translated: String,
}

/// [`Translator`] backed by `POST {base}/translate/{style}`.
#[derive(Debug, Clone)]
pub struct FunTranslationsClient {
    upstream: UpstreamClient,
}

impl FunTranslationsClient {
    pub fn new(config: &UpstreamConfig) -> PokemonResult<Self> {
        Ok(Self {
            upstream: UpstreamClient::new("funtranslations", config)?,
        })
    }

    /// Only a `200 OK` counts as success, whatever the body says.
    #[instrument(skip(self, text))]
    pub async fn translate(&self, text: &str, style: TranslationStyle) -> PokemonResult<String> {
        let request = self
            .upstream
            .post(&format!("/translate/{style}"))
            .json(&TranslateRequest { text });

        match self.upstream.execute::<TranslateResponse>(request).await? {
            UpstreamResponse::Success(body) => Ok(body.contents.translated),
            UpstreamResponse::Failure(status) => Err(PokemonError::Status(status)),
        }
    }
}

#[async_trait]
impl Translator for FunTranslationsClient {
    async fn to_yoda(&self, text: &str) -> PokemonResult<String> {
        self.translate(text, TranslationStyle::Yoda).await
    }

    async fn to_shakespeare(&self, text: &str) -> PokemonResult<String> {
        self.translate(text, TranslationStyle::Shakespeare).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const YODA_BODY: &str = r#"{
        "success": {"total": 1},
        "contents": {
            "translated": "Created by a scientist, it was.",
            "text": "It was created by a scientist.",
            "translation": "yoda"
        }
    }"#;

    fn client(server: &MockServer) -> FunTranslationsClient {
        FunTranslationsClient::new(&UpstreamConfig::new(server.uri(), Duration::from_secs(2)))
            .unwrap()
    }

    #[tokio::test]
    async fn test_to_yoda_posts_text_and_returns_translation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate/yoda"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"text": "It was created by a scientist."})))
            .respond_with(ResponseTemplate::new(200).set_body_string(YODA_BODY))
            .expect(1)
            .mount(&server)
            .await;

        let translated = client(&server)
            .to_yoda("It was created by a scientist.")
            .await
            .unwrap();

        assert_eq!(translated, "Created by a scientist, it was.");
    }

    #[tokio::test]
    async fn test_to_shakespeare_uses_shakespeare_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate/shakespeare"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"contents":{"translated":"Thee did evolve.","text":"It evolved.","translation":"shakespeare"}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let translated = client(&server).to_shakespeare("It evolved.").await.unwrap();
        assert_eq!(translated, "Thee did evolve.");
    }

    #[tokio::test]
    async fn test_non_ok_status_fails_even_with_valid_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(418).set_body_string(YODA_BODY))
            .mount(&server)
            .await;

        let err = client(&server).to_yoda("text").await.unwrap_err();
        assert!(matches!(err, PokemonError::Status(StatusCode::IM_A_TEAPOT)));
    }

    #[tokio::test]
    async fn test_rate_limited_response_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string(
                r#"{"error":{"code":429,"message":"Too Many Requests"}}"#,
            ))
            .mount(&server)
            .await;

        let err = client(&server).to_shakespeare("text").await.unwrap_err();
        assert!(matches!(
            err,
            PokemonError::Status(StatusCode::TOO_MANY_REQUESTS)
        ));
    }

    #[tokio::test]
    async fn test_malformed_ok_body_is_format_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not-a-json"))
            .mount(&server)
            .await;

        let err = client(&server).to_yoda("text").await.unwrap_err();
        assert!(matches!(err, PokemonError::Format(_)));
    }

    #[tokio::test]
    async fn test_empty_translation_is_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"contents":{"translated":""}}"#),
            )
            .mount(&server)
            .await;

        let translated = client(&server).to_yoda("text").await.unwrap();
        assert_eq!(translated, "");
    }

    #[test]
    fn test_new_rejects_empty_url() {
        let err = FunTranslationsClient::new(&UpstreamConfig::new("  ", Duration::from_secs(1)))
            .unwrap_err();
        assert_eq!(err.to_string(), "funtranslations url: invalid configuration");
    }
}
