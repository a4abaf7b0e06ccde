//! Value objects guarding the catalog's identifiers

use std::fmt;

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

const DISPLAY_NAME_MIN_LENGTH: i64 = 1;
const DISPLAY_NAME_MAX_LENGTH: i64 = 256;

// Lower bound is the year of the first surviving motion picture
const RELEASE_YEAR_MIN: i64 = 1888;
const RELEASE_YEAR_MAX: i64 = 2100;

/// Unique movie identifier, an RFC 4122 UUID in canonical text form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(value: impl Into<String>) -> CoreResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(CoreError::required("movie_id"));
        }
        if Uuid::parse_str(&value).is_err() {
            return Err(CoreError::invalid_format("movie_id", &["uuid"]));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MovieId> for String {
    fn from(id: MovieId) -> Self {
        id.0
    }
}

/// Human-readable name of a movie or a person credited on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(value: impl Into<String>) -> CoreResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(CoreError::required("display_name"));
        }
        let length = value.chars().count() as i64;
        if !(DISPLAY_NAME_MIN_LENGTH..DISPLAY_NAME_MAX_LENGTH).contains(&length) {
            return Err(CoreError::out_of_range(
                "display_name",
                DISPLAY_NAME_MIN_LENGTH,
                DISPLAY_NAME_MAX_LENGTH,
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DisplayName> for String {
    fn from(name: DisplayName) -> Self {
        name.0
    }
}

/// Year a movie was first released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseYear(i32);

impl ReleaseYear {
    pub fn new(value: i32) -> CoreResult<Self> {
        if !(RELEASE_YEAR_MIN..RELEASE_YEAR_MAX).contains(&i64::from(value)) {
            return Err(CoreError::out_of_range(
                "release_year",
                RELEASE_YEAR_MIN,
                RELEASE_YEAR_MAX,
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ReleaseYear> for i32 {
    fn from(year: ReleaseYear) -> Self {
        year.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_id() {
        let id = MovieId::new("9b4f28cd-5f44-4aeb-a3a8-2bd3b0b3c069").unwrap();
        assert_eq!(id.as_str(), "9b4f28cd-5f44-4aeb-a3a8-2bd3b0b3c069");
        assert_eq!(String::from(id), "9b4f28cd-5f44-4aeb-a3a8-2bd3b0b3c069");

        let err = MovieId::new("").unwrap_err();
        assert!(err.is_required());
        assert_eq!(err.to_string(), "movie_id is required");

        let err = MovieId::new("not-a-uuid").unwrap_err();
        assert!(err.is_invalid_format());
        assert_eq!(err.entity(), "movie_id");
        assert_eq!(err.to_string(), "movie_id contains an invalid format, expected [uuid]");
    }

    #[test]
    fn test_display_name() {
        let name = DisplayName::new("The Grand Budapest Hotel").unwrap();
        assert_eq!(name.as_str(), "The Grand Budapest Hotel");

        let err = DisplayName::new("").unwrap_err();
        assert!(err.is_required());
        assert_eq!(err.to_string(), "display_name is required");

        let err = DisplayName::new("x".repeat(256)).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(err.to_string(), "display_name is out of range [1,256)");

        // upper bound is exclusive
        assert!(DisplayName::new("x".repeat(255)).is_ok());
    }

    #[test]
    fn test_release_year() {
        let year = ReleaseYear::new(2014).unwrap();
        assert_eq!(year.value(), 2014);
        assert_eq!(i32::from(year), 2014);
        assert!(ReleaseYear::new(1888).is_ok());

        for invalid in [1800, 1887, 2100, 2500] {
            let err = ReleaseYear::new(invalid).unwrap_err();
            assert!(err.is_out_of_range());
            assert_eq!(err.entity(), "release_year");
            assert_eq!(err.to_string(), "release_year is out of range [1888,2100)");
        }
    }
}
