//! DTOs exposed by the clients API endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::client::{Client, NewClient, UpdateClient};

/// The sole representation of a client crossing the HTTP boundary.
///
/// `id` is ignored on create and immutable on update; every other field is
/// overwritten wholesale, there are no partial-update semantics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: Option<i32>,
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: NaiveDateTime,
    pub children: i32,
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: Some(client.id),
            name: client.name,
            cpf: client.cpf,
            income: client.income,
            birth_date: client.birth_date,
            children: client.children,
        }
    }
}

impl From<&ClientDto> for NewClient {
    fn from(dto: &ClientDto) -> Self {
        Self {
            name: dto.name.clone(),
            cpf: dto.cpf.clone(),
            income: dto.income,
            birth_date: dto.birth_date,
            children: dto.children,
        }
    }
}

impl From<&ClientDto> for UpdateClient {
    fn from(dto: &ClientDto) -> Self {
        Self {
            name: dto.name.clone(),
            cpf: dto.cpf.clone(),
            income: dto.income,
            birth_date: dto.birth_date,
            children: dto.children,
        }
    }
}
