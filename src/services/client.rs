use crate::domain::client::{NewClient, UpdateClient};
use crate::dto::client::ClientDto;
use crate::pagination::Paginated;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns the requested page of clients mapped to DTOs.
pub fn find_all_paged<R>(repo: &R, query: ClientListQuery) -> ServiceResult<Paginated<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let pagination = query.pagination.clone();
    let (total, clients) = repo.list_clients(query).map_err(ServiceError::from)?;

    let items = clients.into_iter().map(ClientDto::from).collect();

    Ok(Paginated::new(
        items,
        pagination.page,
        pagination.per_page,
        total,
    ))
}

/// Fetches a single client by its identifier.
pub fn find_by_id<R>(repo: &R, client_id: i32) -> ServiceResult<ClientDto>
where
    R: ClientReader + ?Sized,
{
    let client = repo
        .get_client_by_id(client_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    Ok(client.into())
}

/// Persists a new client built from the DTO fields and returns the stored
/// record with its generated identifier.
pub fn insert<R>(repo: &R, dto: &ClientDto) -> ServiceResult<ClientDto>
where
    R: ClientWriter + ?Sized,
{
    let new_client = NewClient::from(dto);
    let created = repo
        .create_client(&new_client)
        .map_err(ServiceError::from)?;

    Ok(created.into())
}

/// Overwrites every mutable field of an existing client.
pub fn update<R>(repo: &R, client_id: i32, dto: &ClientDto) -> ServiceResult<ClientDto>
where
    R: ClientWriter + ?Sized,
{
    let updates = UpdateClient::from(dto);
    let updated = repo
        .update_client(client_id, &updates)
        .map_err(ServiceError::from)?;

    Ok(updated.into())
}

/// Removes a client by its identifier.
pub fn delete<R>(repo: &R, client_id: i32) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    repo.delete_client(client_id).map_err(ServiceError::from)
}
