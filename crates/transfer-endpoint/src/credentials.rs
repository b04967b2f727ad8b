//!
//! # Credential blocks
//!
//! Credential shapes shared by warehouse and SaaS connectors. Connectors that
//! accept several shapes wrap them in their own one-of block.
//!
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::common as wire;

use crate::diagnostics::{AttrPath, Diagnostics};
use crate::field::Field;
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OAuthCredentials {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub client_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub client_secret: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub refresh_token: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub access_token: Field<SecretString>,
}

impl OAuthCredentials {
    pub fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> wire::OAuthCredentials {
        wire::OAuthCredentials {
            client_id: scalar::required_to_wire(&self.client_id, &path.child("client_id"), diags),
            client_secret: secret::required_to_wire(
                &self.client_secret,
                &path.child("client_secret"),
                diags,
            ),
            refresh_token: secret::to_wire(&self.refresh_token, &path.child("refresh_token"), diags),
            access_token: secret::to_wire(&self.access_token, &path.child("access_token"), diags),
        }
    }

    pub fn from_wire(wire: &wire::OAuthCredentials, prior: Option<&Self>) -> Self {
        Self {
            client_id: scalar::from_wire(&wire.client_id, &prior_field(prior, |p| &p.client_id)),
            client_secret: secret::from_wire(
                wire.client_secret.as_ref(),
                &prior_field(prior, |p| &p.client_secret),
            ),
            refresh_token: secret::from_wire(
                wire.refresh_token.as_ref(),
                &prior_field(prior, |p| &p.refresh_token),
            ),
            access_token: secret::from_wire(
                wire.access_token.as_ref(),
                &prior_field(prior, |p| &p.access_token),
            ),
        }
    }
}

/// single bearer token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AccessToken {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub access_token: Field<SecretString>,
}

impl AccessToken {
    pub fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> wire::AccessToken {
        wire::AccessToken {
            access_token: secret::required_to_wire(
                &self.access_token,
                &path.child("access_token"),
                diags,
            ),
        }
    }

    pub fn from_wire(wire: &wire::AccessToken, prior: Option<&Self>) -> Self {
        Self {
            access_token: secret::from_wire(
                wire.access_token.as_ref(),
                &prior_field(prior, |p| &p.access_token),
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct UsernamePassword {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub username: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub password: Field<SecretString>,
}

impl UsernamePassword {
    pub fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> wire::UsernamePassword {
        wire::UsernamePassword {
            username: scalar::required_to_wire(&self.username, &path.child("username"), diags),
            password: secret::required_to_wire(&self.password, &path.child("password"), diags),
        }
    }

    pub fn from_wire(wire: &wire::UsernamePassword, prior: Option<&Self>) -> Self {
        Self {
            username: scalar::from_wire(&wire.username, &prior_field(prior, |p| &p.username)),
            password: secret::from_wire(wire.password.as_ref(), &prior_field(prior, |p| &p.password)),
        }
    }
}
