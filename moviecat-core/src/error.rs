//! Classified errors shared across the catalog's layers

use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Top-level error group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Domain,
    Infrastructure,
}

/// Fine-grained classification of a domain error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    None,
    NotFound,
    AlreadyExists,
    OutOfRange,
    InvalidFormat,
    Required,
}

/// Classified error carried by value up to the boundary layer.
///
/// The description is rendered once at construction and never recomputed.
/// Two errors compare equal only when group, kind, entity and description
/// all match, so an "already exists" error for `movie` is never equal to
/// one for `director`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description}")]
pub struct CoreError {
    group: Group,
    kind: Kind,
    entity: String,
    description: String,
}

impl CoreError {
    /// Generic domain error; the description is kept verbatim
    pub fn domain(entity: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            group: Group::Domain,
            kind: Kind::None,
            entity: entity.into(),
            description: description.into(),
        }
    }

    /// Generic infrastructure error (storage, network, third parties); carries no entity
    pub fn infrastructure(description: impl Into<String>) -> Self {
        Self {
            group: Group::Infrastructure,
            kind: Kind::None,
            entity: String::new(),
            description: description.into(),
        }
    }

    /// The requested entity does not exist
    pub fn not_found(entity: impl Into<String>) -> Self {
        let entity = entity.into();
        let description = if entity.is_empty() {
            "not found".to_string()
        } else {
            format!("{} not found", entity)
        };
        Self { group: Group::Domain, kind: Kind::NotFound, entity, description }
    }

    /// A uniqueness constraint was violated
    pub fn already_exists(entity: impl Into<String>) -> Self {
        let entity = entity.into();
        let description = if entity.is_empty() {
            "already exists".to_string()
        } else {
            format!("{} already exists", entity)
        };
        Self { group: Group::Domain, kind: Kind::AlreadyExists, entity, description }
    }

    /// A numeric value fell outside `[lower,upper)`.
    ///
    /// Bounds are rendered as given; no check that `lower < upper`.
    pub fn out_of_range(entity: impl Into<String>, lower: i64, upper: i64) -> Self {
        let entity = entity.into();
        let description = if entity.is_empty() {
            format!("out of range [{},{})", lower, upper)
        } else {
            format!("{} is out of range [{},{})", entity, lower, upper)
        };
        Self { group: Group::Domain, kind: Kind::OutOfRange, entity, description }
    }

    /// A value failed a format expectation.
    ///
    /// Expected type labels are joined by `,` verbatim, empty entries included.
    pub fn invalid_format(entity: impl Into<String>, expected: &[&str]) -> Self {
        let entity = entity.into();
        let expected = expected.join(",");
        let description = if entity.is_empty() {
            format!("invalid format, expected [{}]", expected)
        } else {
            format!("{} contains an invalid format, expected [{}]", entity, expected)
        };
        Self { group: Group::Domain, kind: Kind::InvalidFormat, entity, description }
    }

    /// A mandatory value was missing
    pub fn required(entity: impl Into<String>) -> Self {
        let entity = entity.into();
        let description = if entity.is_empty() {
            "required".to_string()
        } else {
            format!("{} is required", entity)
        };
        Self { group: Group::Domain, kind: Kind::Required, entity, description }
    }

    /// Label of the entity the error concerns, possibly empty
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Check if the error belongs to the domain group
    pub fn is_domain(&self) -> bool {
        self.group == Group::Domain
    }

    /// Check if the error belongs to the infrastructure group
    pub fn is_infrastructure(&self) -> bool {
        self.group == Group::Infrastructure
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == Kind::NotFound
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind == Kind::AlreadyExists
    }

    pub fn is_out_of_range(&self) -> bool {
        self.kind == Kind::OutOfRange
    }

    pub fn is_invalid_format(&self) -> bool {
        self.kind == Kind::InvalidFormat
    }

    pub fn is_required(&self) -> bool {
        self.kind == Kind::Required
    }
}
