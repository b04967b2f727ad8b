//!
//! CRM, support and billing sources: HubSpot, Intercom and Stripe.
//!
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::saas::{self as wire, hubspot_credentials};

use crate::connectors::ConnectorSettings;
use crate::credentials::{AccessToken, OAuthCredentials};
use crate::diagnostics::{AttrPath, Diagnostics};
use crate::field::Field;
use crate::one_of::{self, exactly_one};
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HubspotCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth: Option<OAuthCredentials>,
    /// private app access token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_app: Option<AccessToken>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HubspotSource {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<HubspotCredentials>,
}

impl ConnectorSettings for HubspotSource {
    const NAME: &'static str = "hubspot_source";

    type Wire = wire::HubspotSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        let credentials = one_of::required(self.credentials.as_ref(), "credentials", path, diags)
            .and_then(|credentials| {
                let path = path.child("credentials");
                if !exactly_one(
                    &path,
                    &[
                        ("oauth", credentials.oauth.is_some()),
                        ("private_app", credentials.private_app.is_some()),
                    ],
                    diags,
                ) {
                    return None;
                }
                let credentials = match (&credentials.oauth, &credentials.private_app) {
                    (Some(oauth), _) => {
                        hubspot_credentials::Credentials::Oauth(oauth.to_wire(&path.child("oauth"), diags))
                    }
                    (None, Some(token)) => hubspot_credentials::Credentials::PrivateApp(
                        token.to_wire(&path.child("private_app"), diags),
                    ),
                    (None, None) => return None,
                };
                Some(wire::HubspotCredentials {
                    credentials: Some(credentials),
                })
            });
        wire::HubspotSource {
            start_date: scalar::required_to_wire(&self.start_date, &path.child("start_date"), diags),
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
            Some(hubspot_credentials::Credentials::Oauth(oauth)) => Some(HubspotCredentials {
                oauth: Some(OAuthCredentials::from_wire(
                    oauth,
                    prior_credentials.and_then(|c| c.oauth.as_ref()),
                )),
                private_app: None,
            }),
            Some(hubspot_credentials::Credentials::PrivateApp(token)) => Some(HubspotCredentials {
                oauth: None,
                private_app: Some(AccessToken::from_wire(
                    token,
                    prior_credentials.and_then(|c| c.private_app.as_ref()),
                )),
            }),
            None => prior_credentials.cloned(),
        };
        Self {
            start_date: scalar::from_wire(&wire.start_date, &prior_field(prior, |p| &p.start_date)),
            credentials,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct IntercomSource {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub access_token: Field<SecretString>,
}

impl ConnectorSettings for IntercomSource {
    const NAME: &'static str = "intercom_source";

    type Wire = wire::IntercomSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::IntercomSource {
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

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StripeSource {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub account_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub client_secret: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<String>,
    /// days re-read on every sync to catch late updates
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub lookback_window_days: Field<i64>,
    /// days per request window
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub slice_range: Field<i64>,
}

impl ConnectorSettings for StripeSource {
    const NAME: &'static str = "stripe_source";

    type Wire = wire::StripeSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::StripeSource {
            account_id: scalar::required_to_wire(&self.account_id, &path.child("account_id"), diags),
            client_secret: secret::required_to_wire(
                &self.client_secret,
                &path.child("client_secret"),
                diags,
            ),
            start_date: scalar::to_wire(&self.start_date, &path.child("start_date"), diags),
            lookback_window_days: scalar::to_wire(
                &self.lookback_window_days,
                &path.child("lookback_window_days"),
                diags,
            ),
            slice_range: scalar::to_wire(&self.slice_range, &path.child("slice_range"), diags),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        _path: &AttrPath,
        _diags: &mut Diagnostics,
    ) -> Self {
        Self {
            account_id: scalar::from_wire(&wire.account_id, &prior_field(prior, |p| &p.account_id)),
            client_secret: secret::from_wire(
                wire.client_secret.as_ref(),
                &prior_field(prior, |p| &p.client_secret),
            ),
            start_date: scalar::from_wire(&wire.start_date, &prior_field(prior, |p| &p.start_date)),
            lookback_window_days: scalar::from_wire(
                &wire.lookback_window_days,
                &prior_field(prior, |p| &p.lookback_window_days),
            ),
            slice_range: scalar::from_wire(&wire.slice_range, &prior_field(prior, |p| &p.slice_range)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_hubspot_oauth_round_trip() {
        //given
        let flat = HubspotSource {
            start_date: "2024-01-01".into(),
            credentials: Some(HubspotCredentials {
                oauth: Some(OAuthCredentials {
                    client_id: "client".into(),
                    client_secret: "secret".into(),
                    refresh_token: "refresh".into(),
                    access_token: Field::Absent,
                }),
                private_app: None,
            }),
        };
        let path = AttrPath::root(HubspotSource::NAME);
        let mut diags = Diagnostics::new();
        let mut wire = flat.to_wire(&path, &mut diags);
        if let Some(hubspot_credentials::Credentials::Oauth(oauth)) =
            wire.credentials.as_mut().and_then(|c| c.credentials.as_mut())
        {
            oauth.client_secret = Some(transfer_api::common::Secret::raw(""));
            oauth.refresh_token = None;
        }

        //when
        let back = HubspotSource::from_wire(&wire, Some(&flat), &path, &mut diags);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(back, flat);
    }

    #[test]
    fn test_hubspot_private_app() {
        let flat = HubspotSource {
            start_date: "2024-01-01".into(),
            credentials: Some(HubspotCredentials {
                oauth: None,
                private_app: Some(AccessToken {
                    access_token: "pat-na1".into(),
                }),
            }),
        };
        let mut diags = Diagnostics::new();
        let wire = flat.to_wire(&AttrPath::root(HubspotSource::NAME), &mut diags);
        assert!(diags.is_empty());
        assert!(matches!(
            wire.credentials.and_then(|c| c.credentials),
            Some(hubspot_credentials::Credentials::PrivateApp(_))
        ));
    }

    #[test]
    fn test_intercom_round_trip() {
        let flat = IntercomSource {
            start_date: "2024-01-01".into(),
            access_token: "token".into(),
        };
        let path = AttrPath::root(IntercomSource::NAME);
        let mut diags = Diagnostics::new();
        let wire = flat.to_wire(&path, &mut diags);
        assert_eq!(IntercomSource::from_wire(&wire, None, &path, &mut diags), flat);
    }

    #[test]
    fn test_stripe_zero_lookback_survives() {
        //given
        let flat = StripeSource {
            account_id: "acct_1".into(),
            client_secret: "sk_live".into(),
            start_date: "2024-01-01".into(),
            lookback_window_days: Field::Known(0),
            slice_range: Field::Absent,
        };
        let path = AttrPath::root(StripeSource::NAME);
        let mut diags = Diagnostics::new();

        //when
        let wire = flat.to_wire(&path, &mut diags);
        let back = StripeSource::from_wire(&wire, Some(&flat), &path, &mut diags);

        //then
        assert_eq!(back.lookback_window_days, Field::Known(0));
        assert_eq!(back.slice_range, Field::Absent);
        assert_eq!(back, flat);
    }
}
