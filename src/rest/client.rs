use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::BackendSettings;
use crate::error::{GraftError, Result};
use crate::model::{CompanyRecord, NewUser, OneOrMany, UserPatch, UserRecord};

/// Adapter over the REST backend.
///
/// Holds no mutable state; cloning shares the underlying connection pool, and
/// concurrent calls for the same or different resources are fine. Each
/// operation issues exactly one request.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    users_url: Url,
    companies_url: Url,
}

impl RestClient {
    pub fn new(settings: &BackendSettings) -> Result<Self> {
        let mut base: Url = settings.base_url.parse()?;
        // Url::join resolves against the parent unless the base path ends in
        // a slash, which would drop a configured path prefix like /api.
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            users_url: base.join(settings.users_path.trim_start_matches('/'))?,
            companies_url: base.join(settings.companies_path.trim_start_matches('/'))?,
        })
    }

    /// GET the users collection for the root `user` query.
    pub async fn fetch_user(&self) -> Result<OneOrMany<UserRecord>> {
        self.get(self.users_url.clone()).await
    }

    /// GET the companies collection for the root `company` query.
    pub async fn fetch_company(&self) -> Result<OneOrMany<CompanyRecord>> {
        self.get(self.companies_url.clone()).await
    }

    /// GET the company related to a user (`User.company`).
    pub async fn fetch_user_company(&self) -> Result<OneOrMany<CompanyRecord>> {
        self.get(self.companies_url.clone()).await
    }

    /// GET the users belonging to a company (`Company.users`).
    pub async fn fetch_company_users(&self) -> Result<OneOrMany<UserRecord>> {
        self.get(self.users_url.clone()).await
    }

    pub async fn create_user(&self, input: &NewUser) -> Result<UserRecord> {
        debug!(url = %self.users_url, "POST user");
        let response = self
            .http
            .post(self.users_url.clone())
            .json(input)
            .send()
            .await?
            .error_for_status()?;
        decode(response).await
    }

    pub async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<UserRecord> {
        let url = self.user_url(id)?;
        debug!(%url, "PATCH user");
        let response = self
            .http
            .patch(url)
            .json(patch)
            .send()
            .await?
            .error_for_status()?;
        decode(response).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<UserRecord> {
        let url = self.user_url(id)?;
        debug!(%url, "DELETE user");
        let response = self.http.delete(url).send().await?.error_for_status()?;
        decode(response).await
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?.error_for_status()?;
        decode(response).await
    }

    fn user_url(&self, id: &str) -> Result<Url> {
        let mut url = self.users_url.clone();
        url.path_segments_mut()
            .map_err(|_| GraftError::Shape("users URL cannot carry an id segment".to_string()))?
            .push(id);
        Ok(url)
    }
}

/// Decode a 2xx body, mapping decode failures to the shape-error variant
/// instead of crashing the request.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| GraftError::Shape(e.to_string()))
}
