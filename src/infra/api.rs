//! `reqwest`-backed implementation of the transport port.

use async_trait::async_trait;
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::application::api::{ApiError, PostApi};
use crate::domain::posts::{NewPost, Post};

#[derive(Clone, Debug)]
pub struct HttpPostApi {
    client: Client,
    base: Url,
}

impl HttpPostApi {
    pub fn new(base: &Url) -> Result<Self, ApiError> {
        // Joining relative paths drops the last segment of a slash-less
        // base, so a prefix like /api must end with a slash to survive.
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("foglio/", env!("CARGO_PKG_VERSION"))
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(ApiError::Url)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        debug!(%method, %url, "issuing request");
        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(b);
        }
        let resp = req.send().await?;
        Self::handle(resp).await
    }

    async fn request_unit(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let url = self.url(path)?;
        debug!(%method, %url, "issuing request");
        let resp = self.client.request(method, url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn handle<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl PostApi for HttpPostApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.request(Method::GET, "posts", None::<&()>).await
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError> {
        self.request(Method::POST, "posts", Some(post)).await
    }

    async fn update_post(&self, id: u64, post: &Post) -> Result<Post, ApiError> {
        let path = format!("posts/{id}");
        self.request(Method::PUT, &path, Some(post)).await
    }

    async fn delete_post(&self, id: u64) -> Result<(), ApiError> {
        let path = format!("posts/{id}");
        self.request_unit(Method::DELETE, &path).await
    }
}
