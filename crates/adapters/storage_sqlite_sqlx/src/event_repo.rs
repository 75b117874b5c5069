//! `SQLite` implementation of [`EventRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use roster_app::ports::EventRepository;
use roster_domain::error::RosterError;
use roster_domain::event::{Event, EventField, NewEvent};
use roster_domain::id::EventId;

use crate::error::StorageError;

struct Wrapper(Event);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let created_at_str: String = row.try_get("created_at")?;

        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Event {
            id: EventId::from_raw(id),
            name,
            created_at,
        }))
    }
}

const INSERT: &str = "INSERT INTO events (name, created_at) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, created_at FROM events ORDER BY id ASC";
const SELECT_BY_NAME: &str = "SELECT id, name, created_at FROM events ORDER BY name ASC, id ASC";

/// `SQLite`-backed event repository.
pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EventRepository for SqliteEventRepository {
    fn create(&self, event: NewEvent) -> impl Future<Output = Result<Event, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let created_at = roster_domain::time::now();
            let result = sqlx::query(INSERT)
                .bind(&event.name)
                .bind(created_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let id = EventId::from_raw(result.last_insert_rowid());
            Ok(event.into_event(id, created_at))
        }
    }

    fn list(
        &self,
        order_by: EventField,
    ) -> impl Future<Output = Result<Vec<Event>, RosterError>> + Send {
        let pool = self.pool.clone();
        let sql = match order_by {
            EventField::Id => SELECT_BY_ID,
            EventField::Name => SELECT_BY_NAME,
        };
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(sql)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteEventRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteEventRepository::new(db.pool().clone())
    }

    fn named(name: &str) -> NewEvent {
        NewEvent {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_and_list_event() {
        let repo = setup().await;
        let created = repo.create(named("Launch")).await.unwrap();

        let all = repo.list(EventField::Name).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
        assert_eq!(all[0].name, "Launch");
    }

    #[tokio::test]
    async fn should_order_events_by_requested_field() {
        let repo = setup().await;
        repo.create(named("Retro")).await.unwrap();
        repo.create(named("Kickoff")).await.unwrap();
        repo.create(named("Launch")).await.unwrap();

        let by_name: Vec<String> = repo
            .list(EventField::Name)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(by_name, ["Kickoff", "Launch", "Retro"]);

        let by_id: Vec<String> = repo
            .list(EventField::Id)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(by_id, ["Retro", "Kickoff", "Launch"]);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_events() {
        let repo = setup().await;
        assert!(repo.list(EventField::Name).await.unwrap().is_empty());
    }
}
