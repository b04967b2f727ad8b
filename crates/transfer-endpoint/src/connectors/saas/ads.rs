use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::saas::{self as wire, linkedin_ads_credentials};

use crate::connectors::ConnectorSettings;
use crate::credentials::{AccessToken, OAuthCredentials};
use crate::diagnostics::{AttrPath, Diagnostics};
use crate::field::Field;
use crate::one_of::{self, exactly_one};
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

/// GAQL query stored into its own table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GoogleAdsCustomQuery {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub query: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub table_name: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GoogleAdsSource {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub customer_ids: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub developer_token: Field<SecretString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<OAuthCredentials>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub end_date: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub conversion_window_days: Field<i64>,
    /// manager account used to access the customers
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub login_customer_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub custom_queries: Field<Vec<GoogleAdsCustomQuery>>,
}

impl ConnectorSettings for GoogleAdsSource {
    const NAME: &'static str = "google_ads_source";

    type Wire = wire::GoogleAdsSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::GoogleAdsSource {
            customer_ids: scalar::required_to_wire(&self.customer_ids, &path.child("customer_ids"), diags),
            developer_token: secret::required_to_wire(
                &self.developer_token,
                &path.child("developer_token"),
                diags,
            ),
            credentials: one_of::required(self.credentials.as_ref(), "credentials", path, diags)
                .map(|oauth| oauth.to_wire(&path.child("credentials"), diags)),
            start_date: scalar::required_to_wire(&self.start_date, &path.child("start_date"), diags),
            end_date: scalar::to_wire(&self.end_date, &path.child("end_date"), diags),
            conversion_window_days: scalar::to_wire(
                &self.conversion_window_days,
                &path.child("conversion_window_days"),
                diags,
            ),
            login_customer_id: scalar::to_wire(
                &self.login_customer_id,
                &path.child("login_customer_id"),
                diags,
            ),
            custom_queries: scalar::records_to_wire(
                &self.custom_queries,
                &path.child("custom_queries"),
                diags,
                |query, path, diags| wire::GoogleAdsCustomQuery {
                    query: scalar::required_to_wire(&query.query, &path.child("query"), diags),
                    table_name: scalar::required_to_wire(
                        &query.table_name,
                        &path.child("table_name"),
                        diags,
                    ),
                },
            ),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        let prior_credentials = prior.and_then(|p| p.credentials.as_ref());
        Self {
            customer_ids: scalar::from_wire(&wire.customer_ids, &prior_field(prior, |p| &p.customer_ids)),
            developer_token: secret::from_wire(
                wire.developer_token.as_ref(),
                &prior_field(prior, |p| &p.developer_token),
            ),
            credentials: match &wire.credentials {
                Some(oauth) => Some(OAuthCredentials::from_wire(oauth, prior_credentials)),
                None => prior_credentials.cloned(),
            },
            start_date: scalar::from_wire(&wire.start_date, &prior_field(prior, |p| &p.start_date)),
            end_date: scalar::from_wire(&wire.end_date, &prior_field(prior, |p| &p.end_date)),
            conversion_window_days: scalar::from_wire(
                &wire.conversion_window_days,
                &prior_field(prior, |p| &p.conversion_window_days),
            ),
            login_customer_id: scalar::from_wire(
                &wire.login_customer_id,
                &prior_field(prior, |p| &p.login_customer_id),
            ),
            custom_queries: scalar::records_from_wire(
                &wire.custom_queries,
                &prior_field(prior, |p| &p.custom_queries),
                &path.child("custom_queries"),
                diags,
                |query, prior, _, _| GoogleAdsCustomQuery {
                    query: scalar::from_wire(&query.query, &prior_field(prior, |q| &q.query)),
                    table_name: scalar::from_wire(
                        &query.table_name,
                        &prior_field(prior, |q| &q.table_name),
                    ),
                },
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LinkedinAdsCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth: Option<OAuthCredentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<AccessToken>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LinkedinAdsSource {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<String>,
    /// numeric ad account ids, every account when empty
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub account_ids: Field<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<LinkedinAdsCredentials>,
}

impl ConnectorSettings for LinkedinAdsSource {
    const NAME: &'static str = "linkedinads_source";

    type Wire = wire::LinkedinAdsSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        let credentials = one_of::required(self.credentials.as_ref(), "credentials", path, diags)
            .and_then(|credentials| {
                let path = path.child("credentials");
                if !exactly_one(
                    &path,
                    &[
                        ("oauth", credentials.oauth.is_some()),
                        ("access_token", credentials.access_token.is_some()),
                    ],
                    diags,
                ) {
                    return None;
                }
                let credentials = match (&credentials.oauth, &credentials.access_token) {
                    (Some(oauth), _) => linkedin_ads_credentials::Credentials::Oauth(
                        oauth.to_wire(&path.child("oauth"), diags),
                    ),
                    (None, Some(token)) => linkedin_ads_credentials::Credentials::AccessToken(
                        token.to_wire(&path.child("access_token"), diags),
                    ),
                    (None, None) => return None,
                };
                Some(wire::LinkedinAdsCredentials {
                    credentials: Some(credentials),
                })
            });
        wire::LinkedinAdsSource {
            start_date: scalar::required_to_wire(&self.start_date, &path.child("start_date"), diags),
            account_ids: scalar::to_wire(&self.account_ids, &path.child("account_ids"), diags),
            credentials,
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        _path: &AttrPath,
        _diags: &mut Diagnostics,
    ) -> Self {
        let prior_credentials = prior.and_then(|p| p.credentials.as_ref());
        let credentials = match wire.credentials.as_ref().and_then(|c| c.credentials.as_ref()) {
            Some(linkedin_ads_credentials::Credentials::Oauth(oauth)) => Some(LinkedinAdsCredentials {
                oauth: Some(OAuthCredentials::from_wire(
                    oauth,
                    prior_credentials.and_then(|c| c.oauth.as_ref()),
                )),
                access_token: None,
            }),
            Some(linkedin_ads_credentials::Credentials::AccessToken(token)) => {
                Some(LinkedinAdsCredentials {
                    oauth: None,
                    access_token: Some(AccessToken::from_wire(
                        token,
                        prior_credentials.and_then(|c| c.access_token.as_ref()),
                    )),
                })
            }
            None => prior_credentials.cloned(),
        };
        Self {
            start_date: scalar::from_wire(&wire.start_date, &prior_field(prior, |p| &p.start_date)),
            account_ids: scalar::from_wire(&wire.account_ids, &prior_field(prior, |p| &p.account_ids)),
            credentials,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InstagramSource {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub access_token: Field<SecretString>,
}

impl ConnectorSettings for InstagramSource {
    const NAME: &'static str = "instagram_source";

    type Wire = wire::InstagramSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::InstagramSource {
            start_date: scalar::required_to_wire(&self.start_date, &path.child("start_date"), diags),
            access_token: secret::required_to_wire(&self.access_token, &path.child("access_token"), diags),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        _path: &AttrPath,
        _diags: &mut Diagnostics,
    ) -> Self {
        Self {
            start_date: scalar::from_wire(&wire.start_date, &prior_field(prior, |p| &p.start_date)),
            access_token: secret::from_wire(
                wire.access_token.as_ref(),
                &prior_field(prior, |p| &p.access_token),
            ),
        }
    }
}
