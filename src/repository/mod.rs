use serde::Deserialize;

use crate::db::DbPool;
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod client;
pub mod errors;
#[cfg(test)]
pub mod mock;

#[derive(Debug, Clone)]
pub struct Pagination {
    /// Zero-based page number.
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Column a client listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    #[default]
    Name,
    Cpf,
    Income,
    BirthDate,
    Children,
}

/// Direction applied to the ordering column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default)]
pub struct ClientListQuery {
    pub pagination: Pagination,
    pub order_by: SortField,
    pub direction: SortDirection,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Pagination { page, per_page };
        self
    }

    pub fn order_by(mut self, field: SortField) -> Self {
        self.order_by = field;
        self
    }

    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn update_client(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client>;
    fn delete_client(&self, client_id: i32) -> RepositoryResult<()>;
}

/// Diesel-backed repository shared across request handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn conn(&self) -> Result<crate::db::DbConnection, RepositoryError> {
        Ok(self.pool.get()?)
    }
}
