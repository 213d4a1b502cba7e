use crate::domain::model::{
    ApiReply, Article, Credentials, DeleteArticleRequest, PreferenceSelection,
    PreferencesRequest, SignupRequest,
};
use crate::domain::ports::Backend;
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// `Backend` over JSON HTTP. The session cookie set by `/login` is kept for the
/// lifetime of the client.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidConfigValueError {
                field: "server.base_url".to_string(),
                value: base_url.to_string(),
                reason: format!("Invalid URL format: {}", e),
            })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::ConfigError {
                message: format!("Cannot build URL for {}: {}", path, e),
            })
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiReply> {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        tracing::debug!("{} answered {}", path, status);

        let text = response.text().await?;
        decode_reply(path, status, &text)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("{} answered {}", path, status);

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized {
                path: path.to_string(),
            });
        }

        let text = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::StatusError {
                path: path.to_string(),
                status: status.as_u16(),
                message: error_text(&text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// POST replies carry `{success, message}` even on 4xx, so the body wins over the status.
fn decode_reply(path: &str, status: StatusCode, text: &str) -> Result<ApiReply> {
    match serde_json::from_str::<ApiReply>(text) {
        Ok(reply) => Ok(reply),
        Err(_) if status == StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized {
            path: path.to_string(),
        }),
        Err(_) if !status.is_success() => Err(ClientError::StatusError {
            path: path.to_string(),
            status: status.as_u16(),
            message: error_text(text),
        }),
        Err(e) => Err(ClientError::SerializationError(e)),
    }
}

fn error_text(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl Backend for HttpBackend {
    async fn signup(
        &self,
        credentials: &Credentials,
        preferences: &PreferenceSelection,
    ) -> Result<ApiReply> {
        let body = SignupRequest {
            username: &credentials.username,
            password: &credentials.password,
            preferences,
        };
        self.post_json("/signup", &body).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<ApiReply> {
        self.post_json("/login", credentials).await
    }

    async fn change_preferences(&self, preferences: &PreferenceSelection) -> Result<ApiReply> {
        self.post_json("/change_preferences", &PreferencesRequest { preferences })
            .await
    }

    async fn user_preferences(&self) -> Result<Vec<String>> {
        self.get_list("/get_user_preferences").await
    }

    async fn fetch_articles(&self) -> Result<Vec<Article>> {
        self.get_list("/fetch_articles").await
    }

    async fn save_article(&self, article: &Article) -> Result<ApiReply> {
        self.post_json("/save_article", &article.save_payload()).await
    }

    async fn saved_articles(&self) -> Result<Vec<Article>> {
        self.get_list("/get_saved_articles").await
    }

    async fn delete_article(&self, url: &str) -> Result<ApiReply> {
        self.post_json("/delete_article", &DeleteArticleRequest { url })
            .await
    }

    async fn logout(&self) -> Result<()> {
        let url = self.endpoint("/logout")?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() && !status.is_redirection() {
            return Err(ClientError::StatusError {
                path: "/logout".to_string(),
                status: status.as_u16(),
                message: String::new(),
            });
        }
        Ok(())
    }
}
