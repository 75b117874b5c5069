//! Person: an individual record with name, origin and date of birth.

use std::fmt;

use chrono::NaiveDate;
use serde_json::Value;

use crate::attributes::{AttributeReader, Attributes};
use crate::error::ValidationError;
use crate::id::PersonId;
use crate::projection::{Field, Projectable};
use crate::time::{DATE_FORMAT, Timestamp, parse_date};

const ENTITY: &str = "Person";

/// A stored person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub ethnicity: String,
    pub date_of_birth: NaiveDate,
    pub country_of_origin: String,
    /// Set by the store on insert; never serialized.
    pub created_at: Timestamp,
}

/// A person that has not been stored yet, so has no identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub ethnicity: String,
    pub date_of_birth: NaiveDate,
    pub country_of_origin: String,
}

impl NewPerson {
    /// Parse a creation payload.
    ///
    /// Every declared field except `id` is required.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the payload carries an undeclared
    /// field or `id`, misses a field, holds a non-string value, or has a
    /// `date_of_birth` that is not `YYYY-MM-DD`.
    pub fn from_attributes(attributes: Attributes) -> Result<Self, ValidationError> {
        let declared: Vec<&'static str> = PersonField::WRITABLE.iter().map(|f| f.name()).collect();
        let mut reader = AttributeReader::new(ENTITY, &declared, attributes)?;
        Ok(Self {
            first_name: reader.text(PersonField::FirstName.name())?,
            last_name: reader.text(PersonField::LastName.name())?,
            ethnicity: reader.text(PersonField::Ethnicity.name())?,
            date_of_birth: reader.date(PersonField::DateOfBirth.name())?,
            country_of_origin: reader.text(PersonField::CountryOfOrigin.name())?,
        })
    }

    /// Attach the identity and creation time assigned by the store.
    #[must_use]
    pub fn into_person(self, id: PersonId, created_at: Timestamp) -> Person {
        Person {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            ethnicity: self.ethnicity,
            date_of_birth: self.date_of_birth,
            country_of_origin: self.country_of_origin,
            created_at,
        }
    }
}

/// Serializable and filterable columns of a [`Person`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    Id,
    FirstName,
    LastName,
    Ethnicity,
    DateOfBirth,
    CountryOfOrigin,
}

impl PersonField {
    /// Every field, in allow-list order.
    pub const ALL: &'static [Self] = &[
        Self::Id,
        Self::FirstName,
        Self::LastName,
        Self::Ethnicity,
        Self::DateOfBirth,
        Self::CountryOfOrigin,
    ];

    /// Fields a creation payload may set.
    pub const WRITABLE: &'static [Self] = &[
        Self::FirstName,
        Self::LastName,
        Self::Ethnicity,
        Self::DateOfBirth,
        Self::CountryOfOrigin,
    ];

    /// Look a field up by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

impl Field for PersonField {
    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Ethnicity => "ethnicity",
            Self::DateOfBirth => "date_of_birth",
            Self::CountryOfOrigin => "country_of_origin",
        }
    }
}

impl Projectable for Person {
    type Field = PersonField;
    const ALLOW_LIST: &'static [PersonField] = PersonField::ALL;

    fn value_of(&self, field: PersonField) -> Value {
        match field {
            PersonField::Id => Value::from(self.id.as_raw()),
            PersonField::FirstName => Value::from(self.first_name.clone()),
            PersonField::LastName => Value::from(self.last_name.clone()),
            PersonField::Ethnicity => Value::from(self.ethnicity.clone()),
            PersonField::DateOfBirth => {
                Value::from(self.date_of_birth.format(DATE_FORMAT).to_string())
            }
            PersonField::CountryOfOrigin => Value::from(self.country_of_origin.clone()),
        }
    }
}

/// Typed value a [`PersonFilter`] compares a field against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Id(PersonId),
    Text(String),
    Date(NaiveDate),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Text(text) => f.write_str(text),
            Self::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
        }
    }
}

/// Exact-equality constraints over [`Person`] fields; a record matches when
/// every constraint holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFilter {
    constraints: Vec<(PersonField, FilterValue)>,
}

impl PersonFilter {
    /// Build a filter from raw query parameters, in the order received.
    ///
    /// Constraints are kept sorted by field name so the rendered filter does
    /// not depend on parameter order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] for a key that names no
    /// person field, [`ValidationError::DuplicateField`] for a key given more
    /// than once, [`ValidationError::InvalidId`] for a non-integer `id` and
    /// [`ValidationError::InvalidDate`] for a malformed `date_of_birth`.
    pub fn from_query(params: &[(String, String)]) -> Result<Self, ValidationError> {
        let mut filter = Self::default();
        for (key, raw) in params {
            let field = PersonField::from_name(key).ok_or_else(|| ValidationError::UnknownField {
                entity: ENTITY,
                field: key.clone(),
            })?;
            if filter.constraints.iter().any(|(existing, _)| *existing == field) {
                return Err(ValidationError::DuplicateField {
                    field: field.name(),
                });
            }
            let value = match field {
                PersonField::Id => FilterValue::Id(raw.parse()?),
                PersonField::DateOfBirth => {
                    FilterValue::Date(parse_date(raw).map_err(|_| ValidationError::InvalidDate {
                        field: PersonField::DateOfBirth.name(),
                        value: raw.clone(),
                    })?)
                }
                _ => FilterValue::Text(raw.clone()),
            };
            filter = filter.with(field, value);
        }
        filter.constraints.sort_by_key(|(field, _)| field.name());
        Ok(filter)
    }

    /// Add a constraint, replacing any earlier one on the same field.
    #[must_use]
    pub fn with(mut self, field: PersonField, value: FilterValue) -> Self {
        self.constraints.retain(|(existing, _)| *existing != field);
        self.constraints.push((field, value));
        self
    }

    /// Constraints in insertion order.
    #[must_use]
    pub fn constraints(&self) -> &[(PersonField, FilterValue)] {
        &self.constraints
    }

    /// Whether `person` satisfies every constraint.
    #[must_use]
    pub fn matches(&self, person: &Person) -> bool {
        self.constraints.iter().all(|(field, value)| match value {
            FilterValue::Id(id) => *field == PersonField::Id && person.id == *id,
            FilterValue::Date(date) => {
                *field == PersonField::DateOfBirth && person.date_of_birth == *date
            }
            FilterValue::Text(text) => match field {
                PersonField::FirstName => person.first_name == *text,
                PersonField::LastName => person.last_name == *text,
                PersonField::Ethnicity => person.ethnicity == *text,
                PersonField::CountryOfOrigin => person.country_of_origin == *text,
                PersonField::Id | PersonField::DateOfBirth => false,
            },
        })
    }
}

impl fmt::Display for PersonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (field, value)) in self.constraints.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={value}", field.name())?;
        }
        Ok(())
    }
}
