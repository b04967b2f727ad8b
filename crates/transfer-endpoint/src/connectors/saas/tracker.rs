//!
//! Issue tracker and code hosting sources: Jira and GitHub.
//!
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::saas::{self as wire, github_credentials};

use crate::connectors::ConnectorSettings;
use crate::credentials::{AccessToken, OAuthCredentials};
use crate::diagnostics::{AttrPath, Diagnostics};
use crate::field::Field;
use crate::one_of::{self, exactly_one};
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct JiraSource {
    /// e.g. `acme.atlassian.net`
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub domain: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub email: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub api_token: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub projects: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub expand_issue_changelog: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub render_fields: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub enable_experimental_streams: Field<bool>,
}

impl ConnectorSettings for JiraSource {
    const NAME: &'static str = "jira_source";

    type Wire = wire::JiraSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::JiraSource {
            domain: scalar::required_to_wire(&self.domain, &path.child("domain"), diags),
            email: scalar::required_to_wire(&self.email, &path.child("email"), diags),
            api_token: secret::required_to_wire(&self.api_token, &path.child("api_token"), diags),
            projects: scalar::to_wire(&self.projects, &path.child("projects"), diags),
            start_date: scalar::to_wire(&self.start_date, &path.child("start_date"), diags),
            expand_issue_changelog: scalar::to_wire(
                &self.expand_issue_changelog,
                &path.child("expand_issue_changelog"),
                diags,
            ),
            render_fields: scalar::to_wire(&self.render_fields, &path.child("render_fields"), diags),
            enable_experimental_streams: scalar::to_wire(
                &self.enable_experimental_streams,
                &path.child("enable_experimental_streams"),
                diags,
            ),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        _path: &AttrPath,
        _diags: &mut Diagnostics,
    ) -> Self {
        Self {
            domain: scalar::from_wire(&wire.domain, &prior_field(prior, |p| &p.domain)),
            email: scalar::from_wire(&wire.email, &prior_field(prior, |p| &p.email)),
            api_token: secret::from_wire(wire.api_token.as_ref(), &prior_field(prior, |p| &p.api_token)),
            projects: scalar::from_wire(&wire.projects, &prior_field(prior, |p| &p.projects)),
            start_date: scalar::from_wire(&wire.start_date, &prior_field(prior, |p| &p.start_date)),
            expand_issue_changelog: scalar::from_wire(
                &wire.expand_issue_changelog,
                &prior_field(prior, |p| &p.expand_issue_changelog),
            ),
            render_fields: scalar::from_wire(&wire.render_fields, &prior_field(prior, |p| &p.render_fields)),
            enable_experimental_streams: scalar::from_wire(
                &wire.enable_experimental_streams,
                &prior_field(prior, |p| &p.enable_experimental_streams),
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GithubCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth: Option<OAuthCredentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_access_token: Option<AccessToken>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GithubSource {
    /// `owner/repo` or `owner/*`
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub repositories: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub branch: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub page_size_for_large_streams: Field<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<GithubCredentials>,
}

impl ConnectorSettings for GithubSource {
    const NAME: &'static str = "github_source";

    type Wire = wire::GithubSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        let credentials = one_of::required(self.credentials.as_ref(), "credentials", path, diags)
            .and_then(|credentials| {
                let path = path.child("credentials");
                if !exactly_one(
                    &path,
                    &[
                        ("oauth", credentials.oauth.is_some()),
                        ("personal_access_token", credentials.personal_access_token.is_some()),
                    ],
                    diags,
                ) {
                    return None;
                }
                let credentials = match (&credentials.oauth, &credentials.personal_access_token) {
                    (Some(oauth), _) => {
                        github_credentials::Credentials::Oauth(oauth.to_wire(&path.child("oauth"), diags))
                    }
                    (None, Some(token)) => github_credentials::Credentials::PersonalAccessToken(
                        token.to_wire(&path.child("personal_access_token"), diags),
                    ),
                    (None, None) => return None,
                };
                Some(wire::GithubCredentials {
                    credentials: Some(credentials),
                })
            });
        wire::GithubSource {
            repositories: scalar::required_to_wire(&self.repositories, &path.child("repositories"), diags),
            branch: scalar::to_wire(&self.branch, &path.child("branch"), diags),
            start_date: scalar::to_wire(&self.start_date, &path.child("start_date"), diags),
            page_size_for_large_streams: scalar::to_wire(
                &self.page_size_for_large_streams,
                &path.child("page_size_for_large_streams"),
                diags,
            ),
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
            Some(github_credentials::Credentials::Oauth(oauth)) => Some(GithubCredentials {
                oauth: Some(OAuthCredentials::from_wire(
                    oauth,
                    prior_credentials.and_then(|c| c.oauth.as_ref()),
                )),
                personal_access_token: None,
            }),
            Some(github_credentials::Credentials::PersonalAccessToken(token)) => {
                Some(GithubCredentials {
                    oauth: None,
                    personal_access_token: Some(AccessToken::from_wire(
                        token,
                        prior_credentials.and_then(|c| c.personal_access_token.as_ref()),
                    )),
                })
            }
            None => prior_credentials.cloned(),
        };
        Self {
            repositories: scalar::from_wire(&wire.repositories, &prior_field(prior, |p| &p.repositories)),
            branch: scalar::from_wire(&wire.branch, &prior_field(prior, |p| &p.branch)),
            start_date: scalar::from_wire(&wire.start_date, &prior_field(prior, |p| &p.start_date)),
            page_size_for_large_streams: scalar::from_wire(
                &wire.page_size_for_large_streams,
                &prior_field(prior, |p| &p.page_size_for_large_streams),
            ),
            credentials,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_jira_round_trip() {
        let flat = JiraSource {
            domain: "acme.atlassian.net".into(),
            email: "ops@acme.test".into(),
            api_token: "token".into(),
            projects: Field::Known(vec!["OPS".to_owned(), "DEV".to_owned()]),
            start_date: "2024-01-01".into(),
            expand_issue_changelog: Field::Known(true),
            render_fields: Field::Known(false),
            enable_experimental_streams: Field::Absent,
        };
        let path = AttrPath::root(JiraSource::NAME);
        let mut diags = Diagnostics::new();
        let mut wire = flat.to_wire(&path, &mut diags);
        wire.api_token = None;
        let back = JiraSource::from_wire(&wire, Some(&flat), &path, &mut diags);
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(back, flat);
    }

    #[test]
    fn test_github_token_round_trip() {
        //given
        let flat = GithubSource {
            repositories: Field::Known(vec!["acme/api".to_owned(), "acme/*".to_owned()]),
            branch: "acme/api/main".into(),
            start_date: Field::Absent,
            page_size_for_large_streams: Field::Known(10),
            credentials: Some(GithubCredentials {
                oauth: None,
                personal_access_token: Some(AccessToken {
                    access_token: "ghp_token".into(),
                }),
            }),
        };
        let path = AttrPath::root(GithubSource::NAME);
        let mut diags = Diagnostics::new();
        let mut wire = flat.to_wire(&path, &mut diags);
        if let Some(github_credentials::Credentials::PersonalAccessToken(token)) =
            wire.credentials.as_mut().and_then(|c| c.credentials.as_mut())
        {
            token.access_token = None;
        }

        //when
        let back = GithubSource::from_wire(&wire, Some(&flat), &path, &mut diags);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(back, flat);
    }

    #[test]
    fn test_github_credentials_conflict() {
        let flat = GithubSource {
            repositories: Field::Known(vec!["acme/api".to_owned()]),
            credentials: Some(GithubCredentials {
                oauth: Some(OAuthCredentials::default()),
                personal_access_token: Some(AccessToken::default()),
            }),
            ..Default::default()
        };
        let mut diags = Diagnostics::new();
        flat.to_wire(&AttrPath::root(GithubSource::NAME), &mut diags);
        assert_eq!(
            diags.to_string(),
            "error: github_source.credentials: specify exactly one of: oauth, personal_access_token \
             (found: oauth, personal_access_token)"
        );
    }
}
