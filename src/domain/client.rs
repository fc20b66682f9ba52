use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted client record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: i32,
    pub name: String,
    /// National tax id. Stored as-is, uniqueness is not enforced.
    pub cpf: String,
    pub income: f64,
    pub birth_date: NaiveDateTime,
    pub children: i32,
}

/// Field set for creating a client. The identifier is assigned by the store.
#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: NaiveDateTime,
    pub children: i32,
}

/// Full replacement of a client's mutable fields. The identifier never
/// changes.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateClient {
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: NaiveDateTime,
    pub children: i32,
}
