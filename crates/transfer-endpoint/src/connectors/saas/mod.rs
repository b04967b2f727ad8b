//!
//! # SaaS API sources
//!
//! Sources backed by third party HTTP APIs. Credentials are secrets, dates
//! are `YYYY-MM-DD` strings passed through unchanged.
//!
mod ads;
mod cloudtrail;
mod crm;
mod facebook;
mod metrika;
mod tracker;

pub use ads::{
    GoogleAdsCustomQuery, GoogleAdsSource, InstagramSource, LinkedinAdsCredentials,
    LinkedinAdsSource,
};
pub use cloudtrail::AwsCloudTrailSource;
pub use crm::{HubspotCredentials, HubspotSource, IntercomSource, StripeSource};
pub use facebook::{FacebookCustomInsight, FacebookMarketingSource};
pub use metrika::{MetrikaSource, MetrikaStream};
pub use tracker::{GithubCredentials, GithubSource, JiraSource};
