use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

use transfer_api::common::Secret;

use crate::diagnostics::{AttrPath, Diagnostics};
use crate::field::Field;
use crate::scalar;

const REDACTED: &str = "[REDACTED]";

/// Write-only credential value. Formatting prints a placeholder, the value
/// itself is only reachable through [`SecretString::expose`].
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<&str> for Field<SecretString> {
    fn from(value: &str) -> Self {
        Field::Known(value.into())
    }
}

impl JsonSchema for SecretString {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        "SecretString".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let mut schema = String::json_schema(generator);
        schema.insert("writeOnly".to_owned(), true.into());
        schema
    }
}

/// Secrets are sent as the raw arm. An absent secret is left out of the request.
pub fn to_wire(field: &Field<SecretString>, path: &AttrPath, diags: &mut Diagnostics) -> Option<Secret> {
    match field {
        Field::Known(secret) => Some(Secret::raw(secret.expose())),
        Field::Absent => None,
        Field::Unresolved => {
            scalar::report_unresolved(path, diags);
            None
        }
    }
}

/// Secrets are write-only on the API. A redacted or missing wire value keeps
/// whatever the configuration already held.
pub fn from_wire(wire: Option<&Secret>, prior: &Field<SecretString>) -> Field<SecretString> {
    match wire.and_then(Secret::raw_value) {
        Some(raw) => Field::Known(raw.into()),
        None => prior.clone(),
    }
}

/// required variant of [`to_wire`]
pub fn required_to_wire(
    field: &Field<SecretString>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Option<Secret> {
    if field.is_absent() {
        scalar::report_missing(path, diags);
    }
    to_wire(field, path, diags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_redacted() {
        let secret = SecretString::from("s3cr3t");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(secret.to_string(), "[REDACTED]");
        assert_eq!(secret.expose(), "s3cr3t");
        assert_eq!(SecretString::from("s3cr3t".to_owned()), secret);
    }

    #[test]
    fn test_empty_wire_secret_does_not_clobber() {
        //given
        let prior: Field<SecretString> = "s3cr3t".into();

        //when
        let redacted = from_wire(Some(&Secret::raw("")), &prior);
        let missing = from_wire(None, &prior);
        let unset = from_wire(Some(&Secret::default()), &prior);

        //then
        assert_eq!(redacted, prior);
        assert_eq!(missing, prior);
        assert_eq!(unset, prior);
    }

    #[test]
    fn test_echoed_secret_is_taken() {
        let prior: Field<SecretString> = Field::Absent;
        assert_eq!(
            from_wire(Some(&Secret::raw("fresh")), &prior),
            Field::Known("fresh".into())
        );
    }

    #[test]
    fn test_to_wire() {
        let mut diags = Diagnostics::new();
        let path = AttrPath::root("password");

        assert_eq!(
            to_wire(&"pw".into(), &path, &mut diags),
            Some(Secret::raw("pw"))
        );
        assert_eq!(to_wire(&Field::Absent, &path, &mut diags), None);
        assert!(diags.is_empty());

        assert_eq!(required_to_wire(&Field::Absent, &path, &mut diags), None);
        assert_eq!(to_wire(&Field::Unresolved, &path, &mut diags), None);
        assert_eq!(diags.errors().count(), 2);
    }
}
