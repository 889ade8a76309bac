//! User and consumer account reads.

use reqwest::Method;

use pdk_schemas::{AccountStatus, ConsumerStats, ConsumersPage, UserDetails, UsersPage};

use crate::{validate_paging, ApiError, DeskClient, Session};

/// Filters for `GET /api/admin/consumers`.
#[derive(Debug, Clone)]
pub struct ConsumerListQuery {
    pub page: u32,
    pub limit: u32,
    pub status: Option<AccountStatus>,
    pub search: Option<String>,
}

impl Default for ConsumerListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            status: None,
            search: None,
        }
    }
}

impl ConsumerListQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

impl DeskClient {
    pub async fn users(
        &self,
        session: &Session,
        page: u32,
        limit: u32,
    ) -> Result<UsersPage, ApiError> {
        validate_paging(page, limit)?;
        self.request(
            Method::GET,
            "/api/admin/users",
            Some(session),
            &[("page", page.to_string()), ("limit", limit.to_string())],
            None::<&()>,
        )
        .await
    }

    /// One user plus every order they have placed.
    pub async fn user_details(
        &self,
        session: &Session,
        user_id: &str,
    ) -> Result<UserDetails, ApiError> {
        self.request(
            Method::GET,
            &format!("/api/admin/users/{user_id}"),
            Some(session),
            &[],
            None::<&()>,
        )
        .await
    }

    pub async fn consumers(
        &self,
        session: &Session,
        query: &ConsumerListQuery,
    ) -> Result<ConsumersPage, ApiError> {
        validate_paging(query.page, query.limit)?;
        self.request(
            Method::GET,
            "/api/admin/consumers",
            Some(session),
            &query.to_params(),
            None::<&()>,
        )
        .await
    }

    pub async fn consumer_stats(&self, session: &Session) -> Result<ConsumerStats, ApiError> {
        self.request(
            Method::GET,
            "/api/admin/consumers/stats",
            Some(session),
            &[],
            None::<&()>,
        )
        .await
    }
}
