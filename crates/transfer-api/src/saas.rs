//!
//! # SaaS API sources
//!
//! Sources backed by third party HTTP APIs. Most of them carry a start date
//! and an access token, analytics sources add report definitions.
//!
use crate::common::{AccessToken, OAuthCredentials, Secret};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AwsCloudTrailSource {
    #[prost(string, tag = "1")]
    pub key_id: String,
    #[prost(message, optional, tag = "2")]
    pub secret_key: Option<Secret>,
    #[prost(string, tag = "3")]
    pub region_name: String,
    #[prost(string, tag = "4")]
    pub start_date: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FacebookMarketingSource {
    #[prost(string, tag = "1")]
    pub account_id: String,
    #[prost(message, optional, tag = "2")]
    pub access_token: Option<Secret>,
    #[prost(string, tag = "3")]
    pub start_date: String,
    #[prost(string, tag = "4")]
    pub end_date: String,
    #[prost(bool, tag = "5")]
    pub include_deleted: bool,
    #[prost(bool, tag = "6")]
    pub fetch_thumbnail_images: bool,
    #[prost(message, repeated, tag = "7")]
    pub custom_insights: Vec<FacebookCustomInsight>,
    #[prost(int64, tag = "8")]
    pub max_batch_size: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FacebookCustomInsight {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(enumeration = "InsightField", repeated, tag = "2")]
    pub fields: Vec<i32>,
    #[prost(enumeration = "InsightBreakdown", repeated, tag = "3")]
    pub breakdowns: Vec<i32>,
    #[prost(enumeration = "ActionBreakdown", repeated, tag = "4")]
    pub action_breakdowns: Vec<i32>,
    #[prost(enumeration = "InsightLevel", tag = "5")]
    pub level: i32,
    #[prost(int64, tag = "6")]
    pub time_increment: i64,
    #[prost(string, tag = "7")]
    pub start_date: String,
    #[prost(string, tag = "8")]
    pub end_date: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InsightField {
    Unspecified = 0,
    AccountCurrency = 1,
    AccountId = 2,
    AccountName = 3,
    ActionValues = 4,
    Actions = 5,
    AdId = 6,
    AdName = 7,
    AdsetId = 8,
    AdsetName = 9,
    CampaignId = 10,
    CampaignName = 11,
    Clicks = 12,
    Cpc = 13,
    Cpm = 14,
    Ctr = 15,
    DateStart = 16,
    DateStop = 17,
    Frequency = 18,
    Impressions = 19,
    Objective = 20,
    Reach = 21,
    Spend = 22,
    UniqueClicks = 23,
    VideoPlayActions = 24,
    Conversions = 25,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InsightBreakdown {
    Unspecified = 0,
    Age = 1,
    Gender = 2,
    Country = 3,
    Region = 4,
    Dma = 5,
    DevicePlatform = 6,
    PublisherPlatform = 7,
    PlatformPosition = 8,
    ImpressionDevice = 9,
    ProductId = 10,
    HourlyStatsAggregatedByAdvertiserTimeZone = 11,
    HourlyStatsAggregatedByAudienceTimeZone = 12,
    FrequencyValue = 13,
    PlacePageId = 14,
}

/// Action breakdowns. Every wire name carries an `ACTION_` prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ActionBreakdown {
    Unspecified = 0,
    ActionCanvasComponentName = 1,
    ActionCarouselCardId = 2,
    ActionCarouselCardName = 3,
    ActionDestination = 4,
    ActionDevice = 5,
    ActionReaction = 6,
    ActionTargetId = 7,
    ActionType = 8,
    ActionVideoSound = 9,
    ActionVideoType = 10,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InsightLevel {
    Unspecified = 0,
    Ad = 1,
    Adset = 2,
    Campaign = 3,
    Account = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GoogleAdsSource {
    #[prost(string, repeated, tag = "1")]
    pub customer_ids: Vec<String>,
    #[prost(message, optional, tag = "2")]
    pub developer_token: Option<Secret>,
    #[prost(message, optional, tag = "3")]
    pub credentials: Option<OAuthCredentials>,
    #[prost(string, tag = "4")]
    pub start_date: String,
    #[prost(string, tag = "5")]
    pub end_date: String,
    #[prost(int64, tag = "6")]
    pub conversion_window_days: i64,
    #[prost(string, tag = "7")]
    pub login_customer_id: String,
    #[prost(message, repeated, tag = "8")]
    pub custom_queries: Vec<GoogleAdsCustomQuery>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GoogleAdsCustomQuery {
    #[prost(string, tag = "1")]
    pub query: String,
    #[prost(string, tag = "2")]
    pub table_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HubspotSource {
    #[prost(string, tag = "1")]
    pub start_date: String,
    #[prost(message, optional, tag = "2")]
    pub credentials: Option<HubspotCredentials>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HubspotCredentials {
    #[prost(oneof = "hubspot_credentials::Credentials", tags = "1, 2")]
    pub credentials: Option<hubspot_credentials::Credentials>,
}

pub mod hubspot_credentials {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Credentials {
        #[prost(message, tag = "1")]
        Oauth(super::OAuthCredentials),
        #[prost(message, tag = "2")]
        PrivateApp(super::AccessToken),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InstagramSource {
    #[prost(string, tag = "1")]
    pub start_date: String,
    #[prost(message, optional, tag = "2")]
    pub access_token: Option<Secret>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JiraSource {
    #[prost(string, tag = "1")]
    pub domain: String,
    #[prost(string, tag = "2")]
    pub email: String,
    #[prost(message, optional, tag = "3")]
    pub api_token: Option<Secret>,
    #[prost(string, repeated, tag = "4")]
    pub projects: Vec<String>,
    #[prost(string, tag = "5")]
    pub start_date: String,
    #[prost(bool, tag = "6")]
    pub expand_issue_changelog: bool,
    #[prost(bool, tag = "7")]
    pub render_fields: bool,
    #[prost(bool, tag = "8")]
    pub enable_experimental_streams: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LinkedinAdsSource {
    #[prost(string, tag = "1")]
    pub start_date: String,
    #[prost(int64, repeated, tag = "2")]
    pub account_ids: Vec<i64>,
    #[prost(message, optional, tag = "3")]
    pub credentials: Option<LinkedinAdsCredentials>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LinkedinAdsCredentials {
    #[prost(oneof = "linkedin_ads_credentials::Credentials", tags = "1, 2")]
    pub credentials: Option<linkedin_ads_credentials::Credentials>,
}

pub mod linkedin_ads_credentials {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Credentials {
        #[prost(message, tag = "1")]
        Oauth(super::OAuthCredentials),
        #[prost(message, tag = "2")]
        AccessToken(super::AccessToken),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetrikaSource {
    #[prost(int64, repeated, tag = "1")]
    pub counter_ids: Vec<i64>,
    #[prost(message, optional, tag = "2")]
    pub token: Option<Secret>,
    #[prost(message, repeated, tag = "3")]
    pub streams: Vec<MetrikaStream>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetrikaStream {
    #[prost(enumeration = "MetrikaStreamType", tag = "1")]
    pub stream_type: i32,
    #[prost(string, repeated, tag = "2")]
    pub columns: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MetrikaStreamType {
    Unspecified = 0,
    Hits = 1,
    Visits = 2,
    HitsV2 = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GithubSource {
    #[prost(string, repeated, tag = "1")]
    pub repositories: Vec<String>,
    #[prost(string, tag = "2")]
    pub branch: String,
    #[prost(string, tag = "3")]
    pub start_date: String,
    #[prost(int64, tag = "4")]
    pub page_size_for_large_streams: i64,
    #[prost(message, optional, tag = "5")]
    pub credentials: Option<GithubCredentials>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GithubCredentials {
    #[prost(oneof = "github_credentials::Credentials", tags = "1, 2")]
    pub credentials: Option<github_credentials::Credentials>,
}

pub mod github_credentials {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Credentials {
        #[prost(message, tag = "1")]
        Oauth(super::OAuthCredentials),
        #[prost(message, tag = "2")]
        PersonalAccessToken(super::AccessToken),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntercomSource {
    #[prost(string, tag = "1")]
    pub start_date: String,
    #[prost(message, optional, tag = "2")]
    pub access_token: Option<Secret>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StripeSource {
    #[prost(string, tag = "1")]
    pub account_id: String,
    #[prost(message, optional, tag = "2")]
    pub client_secret: Option<Secret>,
    #[prost(string, tag = "3")]
    pub start_date: String,
    #[prost(int64, tag = "4")]
    pub lookback_window_days: i64,
    #[prost(int64, tag = "5")]
    pub slice_range: i64,
}
