//! Repository implementation for client records.

use diesel::prelude::*;

use crate::{
    domain::client::{Client, NewClient, UpdateClient},
    repository::{
        ClientListQuery, ClientReader, ClientWriter, DieselRepository, SortDirection, SortField,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let client = clients::table
            .find(id)
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }

    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.conn()?;

        let per_page = query.pagination.per_page as i64;
        let offset = query.pagination.page as i64 * per_page;

        let mut stmt = clients::table.into_boxed();
        stmt = match (query.order_by, query.direction) {
            (SortField::Id, SortDirection::Asc) => stmt.order(clients::id.asc()),
            (SortField::Id, SortDirection::Desc) => stmt.order(clients::id.desc()),
            (SortField::Name, SortDirection::Asc) => stmt.order(clients::name.asc()),
            (SortField::Name, SortDirection::Desc) => stmt.order(clients::name.desc()),
            (SortField::Cpf, SortDirection::Asc) => stmt.order(clients::cpf.asc()),
            (SortField::Cpf, SortDirection::Desc) => stmt.order(clients::cpf.desc()),
            (SortField::Income, SortDirection::Asc) => stmt.order(clients::income.asc()),
            (SortField::Income, SortDirection::Desc) => stmt.order(clients::income.desc()),
            (SortField::BirthDate, SortDirection::Asc) => stmt.order(clients::birth_date.asc()),
            (SortField::BirthDate, SortDirection::Desc) => stmt.order(clients::birth_date.desc()),
            (SortField::Children, SortDirection::Asc) => stmt.order(clients::children.asc()),
            (SortField::Children, SortDirection::Desc) => stmt.order(clients::children.desc()),
        };

        let items = stmt
            .limit(per_page)
            .offset(offset)
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Client>>();

        let total: i64 = clients::table.count().get_result(&mut conn)?;

        Ok((total as usize, items))
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        use crate::models::client::{Client as DbClient, NewClient as DbNewClient};
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let db_new_client: DbNewClient = new_client.into();

        let created = diesel::insert_into(clients::table)
            .values(&db_new_client)
            .get_result::<DbClient>(&mut conn)?;

        Ok(created.into())
    }

    fn update_client(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client> {
        use crate::models::client::{Client as DbClient, UpdateClient as DbUpdateClient};
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateClient = updates.into();

        let updated = diesel::update(clients::table.find(client_id))
            .set(&db_updates)
            .get_result::<DbClient>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_client(&self, client_id: i32) -> RepositoryResult<()> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let affected = diesel::delete(clients::table.find(client_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
