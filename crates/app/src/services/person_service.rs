//! Person service: use-cases for creating and looking up people.

use roster_domain::attributes::Attributes;
use roster_domain::error::{NotFoundError, RosterError};
use roster_domain::person::{NewPerson, Person, PersonField, PersonFilter};

use crate::ports::PersonRepository;

/// Field every person listing is sorted by.
pub const PERSON_ORDER: PersonField = PersonField::FirstName;

/// Application service for person operations.
pub struct PersonService<R> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Parse `attributes` and store the resulting person.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Validation`] if the payload does not fit the
    /// person schema, or a storage error propagated from the repository.
    pub async fn create_person(&self, attributes: Attributes) -> Result<Person, RosterError> {
        let person = NewPerson::from_attributes(attributes)?;
        let created = self.repo.create(person).await?;
        tracing::debug!(id = %created.id, "person created");
        Ok(created)
    }

    /// List every person, ordered by first name. An empty list is valid.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_people(&self) -> Result<Vec<Person>, RosterError> {
        self.repo.list(&PersonFilter::default(), PERSON_ORDER).await
    }

    /// List the people matching `filter`, ordered by first name, failing
    /// when nobody matches.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when the filter matches no person,
    /// or a storage error from the repository.
    pub async fn find_people(&self, filter: PersonFilter) -> Result<Vec<Person>, RosterError> {
        let people = self.repo.list(&filter, PERSON_ORDER).await?;
        if people.is_empty() {
            return Err(NotFoundError {
                entity: "Person",
                filter: filter.to_string(),
            }
            .into());
        }
        Ok(people)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_domain::error::ValidationError;
    use roster_domain::id::PersonId;
    use roster_domain::person::FilterValue;
    use serde_json::{Value, json};
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPersonRepo {
        store: Mutex<Vec<Person>>,
    }

    impl PersonRepository for InMemoryPersonRepo {
        fn create(
            &self,
            person: NewPerson,
        ) -> impl Future<Output = Result<Person, RosterError>> + Send {
            let mut store = self.store.lock().unwrap();
            let next = i64::try_from(store.len()).unwrap() + 1;
            let person = person.into_person(PersonId::from_raw(next), roster_domain::time::now());
            store.push(person.clone());
            async move { Ok(person) }
        }

        fn list(
            &self,
            filter: &PersonFilter,
            order_by: PersonField,
        ) -> impl Future<Output = Result<Vec<Person>, RosterError>> + Send {
            assert_eq!(order_by, PersonField::FirstName);
            let store = self.store.lock().unwrap();
            let mut result: Vec<Person> = store
                .iter()
                .filter(|person| filter.matches(person))
                .cloned()
                .collect();
            result.sort_by(|a, b| a.first_name.cmp(&b.first_name).then(a.id.cmp(&b.id)));
            async move { Ok(result) }
        }
    }

    fn make_service() -> PersonService<InMemoryPersonRepo> {
        PersonService::new(InMemoryPersonRepo::default())
    }

    fn payload(first_name: &str) -> Attributes {
        match json!({
            "first_name": first_name,
            "last_name": "Lovelace",
            "ethnicity": "British",
            "date_of_birth": "1815-12-10",
            "country_of_origin": "UK",
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn by_first_name(name: &str) -> PersonFilter {
        PersonFilter::default().with(PersonField::FirstName, FilterValue::Text(name.to_string()))
    }

    #[tokio::test]
    async fn should_create_person_when_payload_valid() {
        let svc = make_service();
        let created = svc.create_person(payload("Ada")).await.unwrap();
        assert_eq!(created.first_name, "Ada");

        let all = svc.list_people().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn should_reject_create_when_payload_has_unknown_field() {
        let svc = make_service();
        let mut attrs = Attributes::new();
        attrs.insert("unknown_field".to_string(), json!("x"));

        let result = svc.create_person(attrs).await;
        assert!(matches!(
            result,
            Err(RosterError::Validation(ValidationError::UnknownField { .. }))
        ));
        assert!(svc.list_people().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_list_people_by_first_name() {
        let svc = make_service();
        svc.create_person(payload("Bob")).await.unwrap();
        svc.create_person(payload("Ann")).await.unwrap();

        let names: Vec<String> = svc
            .list_people()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.first_name)
            .collect();
        assert_eq!(names, ["Ann", "Bob"]);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_people() {
        let svc = make_service();
        assert!(svc.list_people().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_filter_matches_nobody() {
        let svc = make_service();
        svc.create_person(payload("Ada")).await.unwrap();

        let result = svc.find_people(by_first_name("Nonexistent")).await;
        match result {
            Err(RosterError::NotFound(err)) => {
                assert_eq!(err.entity, "Person");
                assert_eq!(err.filter, "first_name=Nonexistent");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_return_only_matching_people() {
        let svc = make_service();
        let ada = svc.create_person(payload("Ada")).await.unwrap();
        svc.create_person(payload("Bob")).await.unwrap();

        let found = svc.find_people(by_first_name("Ada")).await.unwrap();
        assert_eq!(found, vec![ada]);
    }

    #[tokio::test]
    async fn should_return_not_found_for_empty_filter_on_empty_store() {
        let svc = make_service();
        let result = svc.find_people(PersonFilter::default()).await;
        assert!(matches!(result, Err(RosterError::NotFound(_))));
    }
}
