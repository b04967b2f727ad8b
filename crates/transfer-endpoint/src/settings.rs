//!
//! # Settings dispatcher
//!
//! [`EndpointSettings`] holds one optional block per connector variant. The
//! request direction picks the single populated block and converts it into the
//! matching wire arm. The response direction converts whichever wire arm the
//! server populated and leaves every other block as it was.
//!
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use transfer_api::endpoint::EndpointSettings as WireEndpointSettings;
use transfer_api::Settings;

use crate::connectors::ConnectorSettings;
use crate::connectors::clickhouse::{ClickhouseSource, ClickhouseTarget};
use crate::connectors::kafka::{KafkaSource, KafkaTarget};
use crate::connectors::kinesis::KinesisSource;
use crate::connectors::mongo::{MongoSource, MongoTarget};
use crate::connectors::mysql::{MysqlSource, MysqlTarget};
use crate::connectors::postgres::{PostgresSource, PostgresTarget};
use crate::connectors::s3::{S3Source, S3Target};
use crate::connectors::saas::{
    AwsCloudTrailSource, FacebookMarketingSource, GithubSource, GoogleAdsSource, HubspotSource,
    InstagramSource, IntercomSource, JiraSource, LinkedinAdsSource, MetrikaSource, StripeSource,
};
use crate::connectors::search::{ElasticsearchTarget, OpensearchTarget};
use crate::connectors::warehouse::{BigqueryTarget, MssqlSource, RedshiftSource, SnowflakeSource};
use crate::diagnostics::{AttrPath, DiagnosticKind, Diagnostics};
use crate::one_of::{self, Arm};

/// How the dispatcher treats several populated connector blocks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// several blocks are a configuration error
    #[default]
    Strict,
    /// the first block in catalog order wins, the others are reported as a warning
    FirstMatch,
}

macro_rules! endpoint_settings {
    ($($field:ident: $flat:ty => $arm:ident),+ $(,)?) => {
        /// Flat connector settings, exactly one block is expected to be set
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
        #[serde(default)]
        pub struct EndpointSettings {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$flat>,
            )+
        }

        /// Attribute names of every connector variant, in dispatch order
        pub const VARIANT_NAMES: &[&str] = &[$(<$flat as ConnectorSettings>::NAME),+];

        /// A populated connector block borrowed from [`EndpointSettings`]
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Connector<'a> {
            $($arm(&'a $flat),)+
        }

        impl Connector<'_> {
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$arm(_) => <$flat as ConnectorSettings>::NAME,)+
                }
            }

            pub fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Settings {
                let path = path.child(self.name());
                match self {
                    $(Self::$arm(flat) => Settings::$arm(flat.to_wire(&path, diags)),)+
                }
            }
        }

        impl EndpointSettings {
            /// populated blocks in dispatch order
            pub fn connectors(&self) -> Vec<Connector<'_>> {
                let mut found = Vec::new();
                $(
                    if let Some(flat) = &self.$field {
                        found.push(Connector::$arm(flat));
                    }
                )+
                found
            }

            fn arms(&self) -> Vec<Arm> {
                vec![$((<$flat as ConnectorSettings>::NAME, self.$field.is_some()),)+]
            }

            /// Convert the wire arm into its block, `prior` supplies what the
            /// server does not echo. Returns the attribute name of the arm.
            fn merge_arm(
                &mut self,
                wire: &Settings,
                prior: &Self,
                path: &AttrPath,
                diags: &mut Diagnostics,
            ) -> &'static str {
                match wire {
                    $(
                        Settings::$arm(wire) => {
                            let name = <$flat as ConnectorSettings>::NAME;
                            self.$field = Some(<$flat as ConnectorSettings>::from_wire(
                                wire,
                                prior.$field.as_ref(),
                                &path.child(name),
                                diags,
                            ));
                            name
                        }
                    )+
                }
            }
        }
    };
}

endpoint_settings! {
    postgres_source: PostgresSource => PostgresSource,
    postgres_target: PostgresTarget => PostgresTarget,
    mysql_source: MysqlSource => MysqlSource,
    mysql_target: MysqlTarget => MysqlTarget,
    clickhouse_source: ClickhouseSource => ClickhouseSource,
    clickhouse_target: ClickhouseTarget => ClickhouseTarget,
    mongo_source: MongoSource => MongoSource,
    mongo_target: MongoTarget => MongoTarget,
    mssql_source: MssqlSource => MssqlSource,
    snowflake_source: SnowflakeSource => SnowflakeSource,
    redshift_source: RedshiftSource => RedshiftSource,
    bigquery_target: BigqueryTarget => BigqueryTarget,
    kafka_source: KafkaSource => KafkaSource,
    kafka_target: KafkaTarget => KafkaTarget,
    kinesis_source: KinesisSource => KinesisSource,
    elasticsearch_target: ElasticsearchTarget => ElasticsearchTarget,
    opensearch_target: OpensearchTarget => OpensearchTarget,
    s3_source: S3Source => S3Source,
    s3_target: S3Target => S3Target,
    aws_cloudtrail_source: AwsCloudTrailSource => AwsCloudtrailSource,
    facebookmarketing_source: FacebookMarketingSource => FacebookmarketingSource,
    google_ads_source: GoogleAdsSource => GoogleAdsSource,
    hubspot_source: HubspotSource => HubspotSource,
    instagram_source: InstagramSource => InstagramSource,
    jira_source: JiraSource => JiraSource,
    linkedinads_source: LinkedinAdsSource => LinkedinadsSource,
    metrika_source: MetrikaSource => MetrikaSource,
    github_source: GithubSource => GithubSource,
    intercom_source: IntercomSource => IntercomSource,
    stripe_source: StripeSource => StripeSource,
}

impl EndpointSettings {
    /// The connector block a request is built from.
    ///
    /// No block is always an error. Several blocks are an error under
    /// [`SelectionPolicy::Strict`]; [`SelectionPolicy::FirstMatch`] takes the
    /// first one in dispatch order and records a warning naming the rest.
    pub fn select(
        &self,
        policy: SelectionPolicy,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Option<Connector<'_>> {
        let arms = self.arms();
        let found = one_of::populated(&arms);
        if found.len() > 1 && policy == SelectionPolicy::FirstMatch {
            warn!(?found, "several connector blocks set, using the first");
            diags.warning(
                path,
                DiagnosticKind::StructuralAmbiguity {
                    expected: VARIANT_NAMES.to_vec(),
                    found,
                },
            );
        } else if !one_of::exactly_one(path, &arms, diags) {
            return None;
        }
        let connector = self.connectors().into_iter().next()?;
        debug!(connector = connector.name(), "selected connector");
        Some(connector)
    }

    /// Wire settings of the selected block, `None` when selection failed.
    /// Conversion problems of the block are reported into `diags`.
    pub fn to_wire(
        &self,
        policy: SelectionPolicy,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Option<WireEndpointSettings> {
        let connector = self.select(policy, path, diags)?;
        Some(connector.to_wire(path, diags).into())
    }

    /// New settings with the block of the populated wire arm replaced.
    /// A response without a recognized arm keeps the prior settings and is
    /// reported as a warning.
    pub fn from_wire(
        wire: Option<&WireEndpointSettings>,
        prior: &Self,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        let mut merged = prior.clone();
        match wire.and_then(|settings| settings.settings.as_ref()) {
            Some(arm) => {
                let name = merged.merge_arm(arm, prior, path, diags);
                debug!(connector = name, "merged connector settings");
            }
            None => {
                warn!(%path, "response carries no known connector settings");
                diags.warning(
                    path,
                    DiagnosticKind::WireParseFailure("no known connector settings arm".to_owned()),
                );
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use transfer_api::saas as saas_wire;

    use crate::field::Field;

    use super::*;

    fn intercom() -> IntercomSource {
        IntercomSource {
            start_date: "2024-01-01".into(),
            access_token: "token".into(),
        }
    }

    fn stripe() -> StripeSource {
        StripeSource {
            account_id: "acct_1".into(),
            client_secret: "sk_live".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_variant_names_follow_attributes() {
        let schema = serde_json::to_value(schemars::schema_for!(EndpointSettings))
            .expect("schema serializes");
        let properties = schema["properties"]
            .as_object()
            .expect("settings schema has properties");
        let mut attributes: Vec<&str> = properties.keys().map(String::as_str).collect();
        let mut names = VARIANT_NAMES.to_vec();
        attributes.sort_unstable();
        names.sort_unstable();
        assert_eq!(attributes, names);
        assert_eq!(VARIANT_NAMES.len(), 30);
    }

    #[test]
    fn test_no_connector_lists_every_variant() {
        //given
        let settings = EndpointSettings::default();
        let mut diags = Diagnostics::new();

        //when
        let wire = settings.to_wire(SelectionPolicy::Strict, &AttrPath::root("settings"), &mut diags);

        //then
        assert!(wire.is_none());
        assert_eq!(
            diags.to_string(),
            format!(
                "error: settings: specify exactly one of: {}",
                VARIANT_NAMES.join(", ")
            )
        );
    }

    #[test]
    fn test_two_connectors_name_both() {
        //given
        let settings = EndpointSettings {
            postgres_source: Some(PostgresSource::default()),
            kafka_target: Some(KafkaTarget::default()),
            ..Default::default()
        };
        let mut diags = Diagnostics::new();

        //when
        let wire = settings.to_wire(SelectionPolicy::Strict, &AttrPath::root("settings"), &mut diags);

        //then
        assert!(wire.is_none());
        let errors: Vec<_> = diags.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].kind,
            DiagnosticKind::StructuralAmbiguity {
                expected: VARIANT_NAMES.to_vec(),
                found: vec!["postgres_source", "kafka_target"],
            }
        );
    }

    #[test]
    fn test_first_match_warns() {
        //given
        let settings = EndpointSettings {
            intercom_source: Some(intercom()),
            stripe_source: Some(stripe()),
            ..Default::default()
        };
        let mut diags = Diagnostics::new();

        //when
        let wire = settings.to_wire(
            SelectionPolicy::FirstMatch,
            &AttrPath::root("settings"),
            &mut diags,
        );

        //then
        assert!(!diags.has_errors(), "{diags}");
        assert_eq!(diags.warnings().count(), 1);
        assert!(matches!(
            wire.and_then(|w| w.settings),
            Some(Settings::IntercomSource(_))
        ));
    }

    #[test]
    fn test_connector_errors_carry_settings_path() {
        let settings = EndpointSettings {
            intercom_source: Some(IntercomSource {
                start_date: Field::Absent,
                access_token: "token".into(),
            }),
            ..Default::default()
        };
        let mut diags = Diagnostics::new();
        settings.to_wire(SelectionPolicy::Strict, &AttrPath::root("settings"), &mut diags);
        assert_eq!(
            diags.to_string(),
            "error: settings.intercom_source.start_date: missing required value"
        );
    }

    #[test]
    fn test_from_wire_touches_only_populated_arm() {
        //given
        let prior = EndpointSettings {
            intercom_source: Some(intercom()),
            stripe_source: Some(stripe()),
            ..Default::default()
        };
        let wire: WireEndpointSettings = Settings::IntercomSource(saas_wire::IntercomSource {
            start_date: "2024-02-01".to_owned(),
            access_token: None,
        })
        .into();
        let mut diags = Diagnostics::new();

        //when
        let merged =
            EndpointSettings::from_wire(Some(&wire), &prior, &AttrPath::root("settings"), &mut diags);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(
            merged.intercom_source,
            Some(IntercomSource {
                start_date: "2024-02-01".into(),
                access_token: "token".into(),
            })
        );
        assert_eq!(merged.stripe_source, prior.stripe_source);
    }

    #[test]
    fn test_from_wire_without_arm_keeps_prior() {
        let prior = EndpointSettings {
            intercom_source: Some(intercom()),
            ..Default::default()
        };
        let mut diags = Diagnostics::new();
        let merged = EndpointSettings::from_wire(
            Some(&WireEndpointSettings { settings: None }),
            &prior,
            &AttrPath::root("settings"),
            &mut diags,
        );
        assert_eq!(merged, prior);
        assert!(!diags.has_errors());
        assert_eq!(diags.warnings().count(), 1);
    }

    #[test]
    fn test_round_trip_through_dispatcher() {
        //given
        let flat = EndpointSettings {
            stripe_source: Some(StripeSource {
                lookback_window_days: Field::Known(0),
                ..stripe()
            }),
            ..Default::default()
        };
        let path = AttrPath::root("settings");
        let mut diags = Diagnostics::new();

        //when
        let wire = flat.to_wire(SelectionPolicy::Strict, &path, &mut diags);
        let back = EndpointSettings::from_wire(wire.as_ref(), &flat, &path, &mut diags);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(back, flat);
    }
}
