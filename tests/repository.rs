use chrono::NaiveDateTime;
use diesel::connection::SimpleConnection;

use clients_api::domain::client::{NewClient, UpdateClient};
use clients_api::repository::errors::RepositoryError;
use clients_api::repository::{
    ClientListQuery, ClientReader, ClientWriter, DieselRepository, SortDirection, SortField,
};

mod common;

fn birth_date(s: &str) -> NaiveDateTime {
    s.parse().unwrap()
}

fn new_client(name: &str, cpf: &str, income: f64, children: i32) -> NewClient {
    NewClient {
        name: name.to_string(),
        cpf: cpf.to_string(),
        income,
        birth_date: birth_date("1990-01-01T00:00:00"),
        children,
    }
}

#[test]
fn test_client_repository_crud() {
    let test_db = common::TestDb::new("test_client_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let alice = repo
        .create_client(&new_client("Alice", "11122233344", 2500.0, 1))
        .unwrap();
    let bob = repo
        .create_client(&new_client("Bob", "55566677788", 4100.5, 0))
        .unwrap();
    assert!(alice.id > 0);
    assert_ne!(alice.id, bob.id);

    let fetched = repo.get_client_by_id(alice.id).unwrap().unwrap();
    assert_eq!(fetched, alice);

    let (total, items) = repo.list_clients(ClientListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 2);

    let updates = UpdateClient {
        name: "Bobby".to_string(),
        cpf: "99988877766".to_string(),
        income: 5000.0,
        birth_date: birth_date("1985-06-15T00:00:00"),
        children: 3,
    };
    let updated = repo.update_client(bob.id, &updates).unwrap();
    assert_eq!(updated.id, bob.id);
    assert_eq!(updated.name, "Bobby");
    assert_eq!(updated.cpf, "99988877766");
    assert_eq!(updated.income, 5000.0);
    assert_eq!(updated.children, 3);

    let refetched = repo.get_client_by_id(bob.id).unwrap().unwrap();
    assert_eq!(refetched, updated);

    repo.delete_client(alice.id).unwrap();
    assert!(repo.get_client_by_id(alice.id).unwrap().is_none());

    let (total_after, items_after) = repo.list_clients(ClientListQuery::new()).unwrap();
    assert_eq!(total_after, 1);
    assert_eq!(items_after[0].name, "Bobby");
}

#[test]
fn test_missing_ids_surface_as_not_found() {
    let test_db = common::TestDb::new("test_missing_ids_surface_as_not_found.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    assert!(repo.get_client_by_id(42).unwrap().is_none());

    let updates = UpdateClient {
        name: "Nobody".to_string(),
        cpf: "00000000000".to_string(),
        income: 0.0,
        birth_date: birth_date("2000-01-01T00:00:00"),
        children: 0,
    };
    assert!(matches!(
        repo.update_client(42, &updates),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete_client(42),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_list_orders_and_paginates() {
    let test_db = common::TestDb::new("test_list_orders_and_paginates.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_client(&new_client("Carol", "333", 1800.0, 2))
        .unwrap();
    repo.create_client(&new_client("Ana", "111", 2500.0, 1))
        .unwrap();
    repo.create_client(&new_client("Bruno", "222", 900.0, 0))
        .unwrap();

    // Default ordering is name ascending.
    let (total, first_page) = repo
        .list_clients(ClientListQuery::new().paginate(0, 2))
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].name, "Ana");
    assert_eq!(first_page[1].name, "Bruno");

    let (_, second_page) = repo
        .list_clients(ClientListQuery::new().paginate(1, 2))
        .unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Carol");

    let (_, by_income_desc) = repo
        .list_clients(
            ClientListQuery::new()
                .order_by(SortField::Income)
                .direction(SortDirection::Desc),
        )
        .unwrap();
    let incomes: Vec<f64> = by_income_desc.iter().map(|c| c.income).collect();
    assert_eq!(incomes, vec![2500.0, 1800.0, 900.0]);

    let (_, past_the_end) = repo
        .list_clients(ClientListQuery::new().paginate(5, 2))
        .unwrap();
    assert!(past_the_end.is_empty());
}

#[test]
fn test_delete_referenced_client_is_a_constraint_violation() {
    let test_db = common::TestDb::new("test_delete_referenced_client.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let client = repo
        .create_client(&new_client("Alice", "11122233344", 2500.0, 1))
        .unwrap();

    let mut conn = test_db.pool().get().unwrap();
    conn.batch_execute(&format!(
        "CREATE TABLE client_notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            client_id INTEGER NOT NULL REFERENCES clients (id),
            note TEXT NOT NULL
        );
        INSERT INTO client_notes (client_id, note) VALUES ({}, 'keep');",
        client.id
    ))
    .unwrap();
    drop(conn);

    assert!(matches!(
        repo.delete_client(client.id),
        Err(RepositoryError::ConstraintViolation(_))
    ));

    // The row is still there after the refused delete.
    assert!(repo.get_client_by_id(client.id).unwrap().is_some());
}
