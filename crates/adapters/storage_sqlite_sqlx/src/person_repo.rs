//! `SQLite` implementation of [`PersonRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use roster_app::ports::PersonRepository;
use roster_domain::error::RosterError;
use roster_domain::id::PersonId;
use roster_domain::person::{FilterValue, NewPerson, Person, PersonField, PersonFilter};
use roster_domain::projection::Field;
use roster_domain::time::{DATE_FORMAT, parse_date};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Person);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let first_name: String = row.try_get("first_name")?;
        let last_name: String = row.try_get("last_name")?;
        let ethnicity: String = row.try_get("ethnicity")?;
        let date_of_birth_str: String = row.try_get("date_of_birth")?;
        let country_of_origin: String = row.try_get("country_of_origin")?;
        let created_at_str: String = row.try_get("created_at")?;

        let date_of_birth =
            parse_date(&date_of_birth_str).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Person {
            id: PersonId::from_raw(id),
            first_name,
            last_name,
            ethnicity,
            date_of_birth,
            country_of_origin,
            created_at,
        }))
    }
}

const INSERT: &str = "INSERT INTO people (first_name, last_name, ethnicity, date_of_birth, country_of_origin, created_at) VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_ALL: &str = "SELECT id, first_name, last_name, ethnicity, date_of_birth, country_of_origin, created_at FROM people";

/// Column backing a person field. Column names match wire names.
fn column(field: PersonField) -> &'static str {
    field.name()
}

/// Assemble `SELECT … WHERE … ORDER BY …` for a filtered listing.
fn select_query(filter: &PersonFilter, order_by: PersonField) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(SELECT_ALL);
    for (index, (field, value)) in filter.constraints().iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        builder.push(column(*field));
        builder.push(" = ");
        match value {
            FilterValue::Id(id) => builder.push_bind(id.as_raw()),
            FilterValue::Text(text) => builder.push_bind(text.clone()),
            FilterValue::Date(date) => builder.push_bind(date.format(DATE_FORMAT).to_string()),
        };
    }
    builder.push(" ORDER BY ");
    builder.push(column(order_by));
    builder.push(" ASC, id ASC");
    builder
}

/// `SQLite`-backed person repository.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PersonRepository for SqlitePersonRepository {
    fn create(
        &self,
        person: NewPerson,
    ) -> impl Future<Output = Result<Person, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let created_at = roster_domain::time::now();
            let result = sqlx::query(INSERT)
                .bind(&person.first_name)
                .bind(&person.last_name)
                .bind(&person.ethnicity)
                .bind(person.date_of_birth.format(DATE_FORMAT).to_string())
                .bind(&person.country_of_origin)
                .bind(created_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let id = PersonId::from_raw(result.last_insert_rowid());
            Ok(person.into_person(id, created_at))
        }
    }

    fn list(
        &self,
        filter: &PersonFilter,
        order_by: PersonField,
    ) -> impl Future<Output = Result<Vec<Person>, RosterError>> + Send {
        let pool = self.pool.clone();
        let mut builder = select_query(filter, order_by);
        async move {
            let rows: Vec<Wrapper> = builder
                .build_query_as()
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
