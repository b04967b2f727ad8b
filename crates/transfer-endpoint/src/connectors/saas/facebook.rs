//!
//! Facebook Marketing source with custom insight reports.
//!
//! Every insight carries three enumeration lists validated against their own
//! name tables. Action breakdowns are written without the `ACTION_` prefix the
//! API uses, e.g. `device` rather than `ACTION_DEVICE`.
//!
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::saas::{self as wire, ActionBreakdown, InsightBreakdown, InsightField, InsightLevel};

use crate::connectors::ConnectorSettings;
use crate::diagnostics::{AttrPath, Diagnostics};
use crate::enums;
use crate::field::Field;
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FacebookCustomInsight {
    /// table name of the report
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub fields: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub breakdowns: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub action_breakdowns: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub level: Field<String>,
    /// days per row, 1 to 90
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub time_increment: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub end_date: Field<String>,
}

impl FacebookCustomInsight {
    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> wire::FacebookCustomInsight {
        wire::FacebookCustomInsight {
            name: scalar::required_to_wire(&self.name, &path.child("name"), diags),
            fields: enums::encode_list::<InsightField>(&self.fields, &path.child("fields"), diags),
            breakdowns: enums::encode_list::<InsightBreakdown>(
                &self.breakdowns,
                &path.child("breakdowns"),
                diags,
            ),
            action_breakdowns: enums::encode_list::<ActionBreakdown>(
                &self.action_breakdowns,
                &path.child("action_breakdowns"),
                diags,
            ),
            level: enums::encode::<InsightLevel>(&self.level, &path.child("level"), diags),
            time_increment: scalar::to_wire(&self.time_increment, &path.child("time_increment"), diags),
            start_date: scalar::to_wire(&self.start_date, &path.child("start_date"), diags),
            end_date: scalar::to_wire(&self.end_date, &path.child("end_date"), diags),
        }
    }

    fn from_wire(
        wire: &wire::FacebookCustomInsight,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        Self {
            name: scalar::from_wire(&wire.name, &prior_field(prior, |p| &p.name)),
            fields: enums::decode_list::<InsightField>(
                &wire.fields,
                &prior_field(prior, |p| &p.fields),
                &path.child("fields"),
                diags,
            ),
            breakdowns: enums::decode_list::<InsightBreakdown>(
                &wire.breakdowns,
                &prior_field(prior, |p| &p.breakdowns),
                &path.child("breakdowns"),
                diags,
            ),
            action_breakdowns: enums::decode_list::<ActionBreakdown>(
                &wire.action_breakdowns,
                &prior_field(prior, |p| &p.action_breakdowns),
                &path.child("action_breakdowns"),
                diags,
            ),
            level: enums::decode::<InsightLevel>(wire.level, &path.child("level"), diags),
            time_increment: scalar::from_wire(
                &wire.time_increment,
                &prior_field(prior, |p| &p.time_increment),
            ),
            start_date: scalar::from_wire(&wire.start_date, &prior_field(prior, |p| &p.start_date)),
            end_date: scalar::from_wire(&wire.end_date, &prior_field(prior, |p| &p.end_date)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FacebookMarketingSource {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub account_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub access_token: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub end_date: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub include_deleted: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub fetch_thumbnail_images: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub custom_insights: Field<Vec<FacebookCustomInsight>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub max_batch_size: Field<i64>,
}

impl ConnectorSettings for FacebookMarketingSource {
    const NAME: &'static str = "facebookmarketing_source";

    type Wire = wire::FacebookMarketingSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::FacebookMarketingSource {
            account_id: scalar::required_to_wire(&self.account_id, &path.child("account_id"), diags),
            access_token: secret::required_to_wire(&self.access_token, &path.child("access_token"), diags),
            start_date: scalar::required_to_wire(&self.start_date, &path.child("start_date"), diags),
            end_date: scalar::to_wire(&self.end_date, &path.child("end_date"), diags),
            include_deleted: scalar::to_wire(&self.include_deleted, &path.child("include_deleted"), diags),
            fetch_thumbnail_images: scalar::to_wire(
                &self.fetch_thumbnail_images,
                &path.child("fetch_thumbnail_images"),
                diags,
            ),
            custom_insights: scalar::records_to_wire(
                &self.custom_insights,
                &path.child("custom_insights"),
                diags,
                FacebookCustomInsight::to_wire,
            ),
            max_batch_size: scalar::to_wire(&self.max_batch_size, &path.child("max_batch_size"), diags),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        Self {
            account_id: scalar::from_wire(&wire.account_id, &prior_field(prior, |p| &p.account_id)),
            access_token: secret::from_wire(
                wire.access_token.as_ref(),
                &prior_field(prior, |p| &p.access_token),
            ),
            start_date: scalar::from_wire(&wire.start_date, &prior_field(prior, |p| &p.start_date)),
            end_date: scalar::from_wire(&wire.end_date, &prior_field(prior, |p| &p.end_date)),
            include_deleted: scalar::from_wire(
                &wire.include_deleted,
                &prior_field(prior, |p| &p.include_deleted),
            ),
            fetch_thumbnail_images: scalar::from_wire(
                &wire.fetch_thumbnail_images,
                &prior_field(prior, |p| &p.fetch_thumbnail_images),
            ),
            custom_insights: scalar::records_from_wire(
                &wire.custom_insights,
                &prior_field(prior, |p| &p.custom_insights),
                &path.child("custom_insights"),
                diags,
                FacebookCustomInsight::from_wire,
            ),
            max_batch_size: scalar::from_wire(
                &wire.max_batch_size,
                &prior_field(prior, |p| &p.max_batch_size),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn insight() -> FacebookCustomInsight {
        FacebookCustomInsight {
            name: "ads_by_device".into(),
            fields: Field::Known(vec!["ad_id".to_owned(), "clicks".to_owned(), "spend".to_owned()]),
            breakdowns: Field::Known(vec!["age".to_owned()]),
            action_breakdowns: Field::Known(vec!["device".to_owned(), "type".to_owned()]),
            level: "ad".into(),
            time_increment: Field::Known(1),
            start_date: Field::Absent,
            end_date: Field::Absent,
        }
    }

    #[test]
    fn test_action_prefix_hidden() {
        //given
        let mut diags = Diagnostics::new();

        //when
        let wire = insight().to_wire(&AttrPath::root("insight"), &mut diags);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(
            wire.action_breakdowns,
            vec![
                ActionBreakdown::ActionDevice as i32,
                ActionBreakdown::ActionType as i32
            ]
        );
        assert_eq!(wire.level, InsightLevel::Ad as i32);
    }

    #[test]
    fn test_prefixed_name_rejected() {
        let mut flat = insight();
        flat.action_breakdowns = Field::Known(vec!["ACTION_DEVICE".to_owned()]);
        let mut diags = Diagnostics::new();
        flat.to_wire(&AttrPath::root("insight"), &mut diags);
        let errors: Vec<_> = diags.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path.as_str(), "insight.action_breakdowns[0]");
    }

    #[test]
    fn test_source_round_trip() {
        //given
        let flat = FacebookMarketingSource {
            account_id: "1234567890".into(),
            access_token: "token".into(),
            start_date: "2024-01-01".into(),
            include_deleted: Field::Known(false),
            custom_insights: Field::Known(vec![
                insight(),
                FacebookCustomInsight {
                    name: "empty_breakdowns".into(),
                    fields: Field::Known(vec!["impressions".to_owned()]),
                    breakdowns: Field::Known(vec![]),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };
        let path = AttrPath::root(FacebookMarketingSource::NAME);
        let mut diags = Diagnostics::new();
        let mut wire = flat.to_wire(&path, &mut diags);
        wire.access_token = None;

        //when
        let back = FacebookMarketingSource::from_wire(&wire, Some(&flat), &path, &mut diags);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(back, flat);
    }

    #[test]
    fn test_empty_insight_list_is_kept() {
        //given
        let flat: FacebookMarketingSource = serde_yaml::from_str(
            r#"
            account_id: "1234567890"
            access_token: token
            start_date: "2024-01-01"
            include_deleted: false
            custom_insights: []
            "#,
        )
        .expect("parsed");
        let path = AttrPath::root(FacebookMarketingSource::NAME);
        let mut diags = Diagnostics::new();

        //when
        let wire = flat.to_wire(&path, &mut diags);
        let back = FacebookMarketingSource::from_wire(&wire, Some(&flat), &path, &mut diags);
        let yaml = serde_yaml::to_string(&back).expect("serialized");

        //then
        assert!(diags.is_empty(), "{diags}");
        assert!(wire.custom_insights.is_empty());
        assert_eq!(back.custom_insights, Field::Known(vec![]));
        assert!(yaml.contains("custom_insights: []"), "{yaml}");
        assert!(yaml.contains("include_deleted: false"), "{yaml}");
    }

    #[test]
    fn test_absent_insight_list_stays_absent() {
        let flat = FacebookMarketingSource {
            account_id: "1234567890".into(),
            access_token: "token".into(),
            start_date: "2024-01-01".into(),
            ..Default::default()
        };
        let path = AttrPath::root(FacebookMarketingSource::NAME);
        let mut diags = Diagnostics::new();
        let wire = flat.to_wire(&path, &mut diags);
        let back = FacebookMarketingSource::from_wire(&wire, Some(&flat), &path, &mut diags);
        assert_eq!(back.custom_insights, Field::Absent);
    }

    #[test]
    fn test_unknown_field_code_dropped_with_warning() {
        let wire = wire::FacebookCustomInsight {
            name: "report".to_owned(),
            fields: vec![InsightField::Clicks as i32, 999],
            ..Default::default()
        };
        let mut diags = Diagnostics::new();
        let flat = FacebookCustomInsight::from_wire(&wire, None, &AttrPath::root("insight"), &mut diags);
        assert_eq!(flat.fields, Field::Known(vec!["clicks".to_owned()]));
        assert_eq!(diags.warnings().count(), 1);
        assert!(!diags.has_errors());
    }
}
