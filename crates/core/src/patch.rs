//! Three-way field input for partial updates.
//!
//! A plain `Option<T>` cannot tell "the client left this field out" apart
//! from "the client sent `null`". Update DTOs declare their fields as
//! `#[serde(default)] Patch<T>` so that:
//!
//! - a missing key deserializes to [`Patch::Absent`] (leave the column alone),
//! - an explicit `null` deserializes to [`Patch::Null`] (clear the column),
//! - any other value deserializes to [`Patch::Value`] (set the column).

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// `true` when the field was sent, either as `null` or a value.
    pub fn is_set(&self) -> bool {
        !self.is_absent()
    }

    /// The value to write when [`Patch::is_set`] holds.
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Validate or transform a present value, keeping `Absent` and `Null`.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Patch<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(match self {
            Patch::Absent => Patch::Absent,
            Patch::Null => Patch::Null,
            Patch::Value(v) => Patch::Value(f(v)?),
        })
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Input {
        #[serde(default)]
        description: Patch<String>,
    }

    fn parse(json: &str) -> Patch<String> {
        serde_json::from_str::<Input>(json).unwrap().description
    }

    #[test]
    fn missing_key_is_absent() {
        assert_eq!(parse("{}"), Patch::Absent);
    }

    #[test]
    fn explicit_null_is_null() {
        assert_eq!(parse(r#"{"description": null}"#), Patch::Null);
    }

    #[test]
    fn value_is_value() {
        assert_eq!(
            parse(r#"{"description": "algebra"}"#),
            Patch::Value("algebra".to_string())
        );
    }

    #[test]
    fn is_set_distinguishes_absent() {
        assert!(!Patch::<i32>::Absent.is_set());
        assert!(Patch::<i32>::Null.is_set());
        assert_eq!(Patch::Value(3).value(), Some(&3));
        assert_eq!(Patch::<i32>::Null.value(), None);
    }

    #[test]
    fn try_map_propagates_errors() {
        let ok: Result<Patch<usize>, ()> = Patch::Value("abc").try_map(|s| Ok(s.len()));
        assert_eq!(ok, Ok(Patch::Value(3)));

        let err: Result<Patch<usize>, &str> = Patch::Value("abc").try_map(|_| Err("bad"));
        assert_eq!(err, Err("bad"));
    }

    #[test]
    fn try_map_skips_null_and_absent() {
        let null: Result<Patch<usize>, &str> = Patch::<&str>::Null.try_map(|_| Err("called"));
        assert_eq!(null, Ok(Patch::Null));
        let absent: Result<Patch<usize>, &str> = Patch::<&str>::Absent.try_map(|_| Err("called"));
        assert_eq!(absent, Ok(Patch::Absent));
    }
}
