//!
//! # Tri-state field
//!
//! Every scalar attribute of the flat configuration is a [`Field`]:
//!  * `Absent`: omitted by the author, the wire default applies
//!  * `Known`: explicit value, an empty string or list included
//!  * `Unresolved`: supplied by the server later, never valid in a request
//!
//! In YAML a missing key is `Absent`, `~` is `Unresolved` and anything else is `Known`.
//! Structs holding fields use `#[serde(default)]` together with
//! `skip_serializing_if = "Field::is_absent"` so all three states survive a
//! write and read of the state file.
//!
use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Absent,
    Known(T),
    Unresolved,
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

impl From<&str> for Field<String> {
    fn from(value: &str) -> Self {
        Self::Known(value.to_owned())
    }
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }

    pub fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_known(self) -> Option<T> {
        match self {
            Self::Known(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Absent => Field::Absent,
            Self::Known(value) => Field::Known(value),
            Self::Unresolved => Field::Unresolved,
        }
    }

    pub fn map<U, F>(self, f: F) -> Field<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Absent => Field::Absent,
            Self::Known(value) => Field::Known(f(value)),
            Self::Unresolved => Field::Unresolved,
        }
    }

    /// keep `self` unless it is absent
    pub fn or(self, other: Field<T>) -> Field<T> {
        match self {
            Self::Absent => other,
            _ => self,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Known(value) => value.serialize(serializer),
            Self::Absent | Self::Unresolved => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // missing keys never reach here, they take the `Default` value
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Known(value),
            None => Self::Unresolved,
        })
    }
}

impl<T: JsonSchema> JsonSchema for Field<T> {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        <Option<T>>::schema_name()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <Option<T>>::json_schema(generator)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(skip_serializing_if = "Field::is_absent")]
        name: Field<String>,
        #[serde(skip_serializing_if = "Field::is_absent")]
        tables: Field<Vec<String>>,
        #[serde(skip_serializing_if = "Field::is_absent")]
        port: Field<i64>,
    }

    #[test]
    fn test_deserialize_three_states() {
        //given
        let yaml = r#"
            name: ~
            tables: []
        "#;

        //when
        let sample: Sample = serde_yaml::from_str(yaml).expect("parse");

        //then
        assert_eq!(
            sample,
            Sample {
                name: Field::Unresolved,
                tables: Field::Known(vec![]),
                port: Field::Absent,
            }
        );
    }

    #[test]
    fn test_state_survives_write_and_read() {
        //given
        let sample = Sample {
            name: Field::Unresolved,
            tables: Field::Known(vec![]),
            port: Field::Absent,
        };

        //when
        let yaml = serde_yaml::to_string(&sample).expect("write");
        let back: Sample = serde_yaml::from_str(&yaml).expect("read");

        //then
        assert!(!yaml.contains("port"));
        assert_eq!(back, sample);
    }

    #[test]
    fn test_or_keeps_present_value() {
        assert_eq!(Field::Absent.or(Field::Known(1)), Field::Known(1));
        assert_eq!(Field::Known(2).or(Field::Known(1)), Field::Known(2));
        assert_eq!(Field::<i64>::Unresolved.or(Field::Known(1)), Field::Unresolved);
    }
}
