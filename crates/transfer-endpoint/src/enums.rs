//!
//! # Enumeration codecs
//!
//! The flat configuration carries enumerations by name, the wire by `i32` code.
//! Each wire enumeration gets a static name table through [`enum_table!`].
//! The table never lists the unspecified code: encoding an unknown name is an
//! error and decoding `0` yields an absent field.
//!
use transfer_api::common::{CleanupPolicy, ColumnType, ObjectTransferStage};
use transfer_api::kafka::KafkaMechanism;
use transfer_api::s3::{S3OutputEncoding, S3OutputFormat, UnexpectedFieldBehavior};
use transfer_api::saas::{
    ActionBreakdown, InsightBreakdown, InsightField, InsightLevel, MetrikaStreamType,
};
use transfer_api::warehouse::MssqlReplicationMethod;

use crate::diagnostics::{AttrPath, DiagnosticKind, Diagnostics};
use crate::field::Field;
use crate::scalar;

/// Wire enumeration with a canonical name table
pub trait WireEnum: Copy + PartialEq + Sized + 'static {
    /// human readable label used in diagnostics
    const LABEL: &'static str;
    /// canonical name of every specified variant
    const TABLE: &'static [(&'static str, Self)];

    fn code(self) -> i32;

    fn from_code(code: i32) -> Option<Self>;

    fn name(self) -> Option<&'static str> {
        Self::TABLE
            .iter()
            .find(|(_, variant)| *variant == self)
            .map(|(name, _)| *name)
    }

    /// case-insensitive lookup
    fn from_name(name: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(canonical, _)| canonical.eq_ignore_ascii_case(name))
            .map(|(_, variant)| *variant)
    }

    fn names() -> Vec<&'static str> {
        Self::TABLE.iter().map(|(name, _)| *name).collect()
    }
}

macro_rules! enum_table {
    ($ty:ident, $label:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl WireEnum for $ty {
            const LABEL: &'static str = $label;
            const TABLE: &'static [(&'static str, Self)] = &[$(($name, $ty::$variant)),+];

            fn code(self) -> i32 {
                self as i32
            }

            fn from_code(code: i32) -> Option<Self> {
                match $ty::try_from(code) {
                    Ok($ty::Unspecified) | Err(_) => None,
                    Ok(variant) => Some(variant),
                }
            }
        }
    };
}

enum_table!(CleanupPolicy, "cleanup policy", {
    Disabled => "DISABLED",
    Drop => "DROP",
    Truncate => "TRUNCATE",
});

enum_table!(ObjectTransferStage, "object transfer stage", {
    BeforeData => "BEFORE_DATA",
    AfterData => "AFTER_DATA",
    Never => "NEVER",
});

enum_table!(ColumnType, "column type", {
    Int64 => "INT64",
    Int32 => "INT32",
    Int16 => "INT16",
    Int8 => "INT8",
    Uint64 => "UINT64",
    Uint32 => "UINT32",
    Uint16 => "UINT16",
    Uint8 => "UINT8",
    Double => "DOUBLE",
    Boolean => "BOOLEAN",
    String => "STRING",
    Utf8 => "UTF8",
    Any => "ANY",
    Datetime => "DATETIME",
});

enum_table!(KafkaMechanism, "SASL mechanism", {
    Sha256 => "SHA_256",
    Sha512 => "SHA_512",
});

enum_table!(MssqlReplicationMethod, "replication method", {
    Standard => "STANDARD",
    Cdc => "CDC",
});

enum_table!(S3OutputFormat, "output format", {
    Json => "JSON",
    Csv => "CSV",
    Parquet => "PARQUET",
    Raw => "RAW",
});

enum_table!(S3OutputEncoding, "output encoding", {
    Uncompressed => "UNCOMPRESSED",
    Gzip => "GZIP",
});

enum_table!(UnexpectedFieldBehavior, "unexpected field behavior", {
    Ignore => "IGNORE",
    Infer => "INFER",
    Error => "ERROR",
});

enum_table!(MetrikaStreamType, "metrika stream type", {
    Hits => "HITS",
    Visits => "VISITS",
    HitsV2 => "HITS_V2",
});

enum_table!(InsightLevel, "insight level", {
    Ad => "ad",
    Adset => "adset",
    Campaign => "campaign",
    Account => "account",
});

enum_table!(InsightField, "insight field", {
    AccountCurrency => "account_currency",
    AccountId => "account_id",
    AccountName => "account_name",
    ActionValues => "action_values",
    Actions => "actions",
    AdId => "ad_id",
    AdName => "ad_name",
    AdsetId => "adset_id",
    AdsetName => "adset_name",
    CampaignId => "campaign_id",
    CampaignName => "campaign_name",
    Clicks => "clicks",
    Cpc => "cpc",
    Cpm => "cpm",
    Ctr => "ctr",
    DateStart => "date_start",
    DateStop => "date_stop",
    Frequency => "frequency",
    Impressions => "impressions",
    Objective => "objective",
    Reach => "reach",
    Spend => "spend",
    UniqueClicks => "unique_clicks",
    VideoPlayActions => "video_play_actions",
    Conversions => "conversions",
});

enum_table!(InsightBreakdown, "insight breakdown", {
    Age => "age",
    Gender => "gender",
    Country => "country",
    Region => "region",
    Dma => "dma",
    DevicePlatform => "device_platform",
    PublisherPlatform => "publisher_platform",
    PlatformPosition => "platform_position",
    ImpressionDevice => "impression_device",
    ProductId => "product_id",
    HourlyStatsAggregatedByAdvertiserTimeZone => "hourly_stats_aggregated_by_advertiser_time_zone",
    HourlyStatsAggregatedByAudienceTimeZone => "hourly_stats_aggregated_by_audience_time_zone",
    FrequencyValue => "frequency_value",
    PlacePageId => "place_page_id",
});

// the `ACTION_` prefix of the wire names is not part of the flat names
enum_table!(ActionBreakdown, "action breakdown", {
    ActionCanvasComponentName => "canvas_component_name",
    ActionCarouselCardId => "carousel_card_id",
    ActionCarouselCardName => "carousel_card_name",
    ActionDestination => "destination",
    ActionDevice => "device",
    ActionReaction => "reaction",
    ActionTargetId => "target_id",
    ActionType => "type",
    ActionVideoSound => "video_sound",
    ActionVideoType => "video_type",
});

fn encode_name<E: WireEnum>(name: &str, path: &AttrPath, diags: &mut Diagnostics) -> i32 {
    match E::from_name(name) {
        Some(variant) => variant.code(),
        None => {
            diags.error(
                path,
                DiagnosticKind::UnknownEnumName {
                    label: E::LABEL,
                    name: name.to_owned(),
                    expected: E::names(),
                },
            );
            0
        }
    }
}

fn decode_code<E: WireEnum>(code: i32, path: &AttrPath, diags: &mut Diagnostics) -> Option<String> {
    if code == 0 {
        return None;
    }
    match E::from_code(code).and_then(E::name) {
        Some(name) => Some(name.to_owned()),
        None => {
            diags.warning(
                path,
                DiagnosticKind::WireParseFailure(format!("{} code {code}", E::LABEL)),
            );
            None
        }
    }
}

/// name to wire code, absent maps to the unspecified code
pub fn encode<E: WireEnum>(field: &Field<String>, path: &AttrPath, diags: &mut Diagnostics) -> i32 {
    match field {
        Field::Known(name) => encode_name::<E>(name, path, diags),
        Field::Absent => 0,
        Field::Unresolved => {
            scalar::report_unresolved(path, diags);
            0
        }
    }
}

/// wire code to canonical name, the unspecified code yields absent
pub fn decode<E: WireEnum>(code: i32, path: &AttrPath, diags: &mut Diagnostics) -> Field<String> {
    match decode_code::<E>(code, path, diags) {
        Some(name) => Field::Known(name),
        None => Field::Absent,
    }
}

pub fn encode_list<E: WireEnum>(
    field: &Field<Vec<String>>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Vec<i32> {
    match field {
        Field::Known(names) => names
            .iter()
            .enumerate()
            .map(|(idx, name)| encode_name::<E>(name, &path.index(idx), diags))
            .collect(),
        Field::Absent => Vec::new(),
        Field::Unresolved => {
            scalar::report_unresolved(path, diags);
            Vec::new()
        }
    }
}

/// Unknown codes are dropped from the list and reported. The unspecified code
/// has no place inside a list and is reported the same way.
pub fn decode_list<E: WireEnum>(
    codes: &[i32],
    prior: &Field<Vec<String>>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Field<Vec<String>> {
    let names: Vec<String> = codes
        .iter()
        .enumerate()
        .filter_map(|(idx, code)| {
            let item_path = path.index(idx);
            if *code == 0 {
                diags.warning(
                    &item_path,
                    DiagnosticKind::WireParseFailure(format!("unspecified {} in list", E::LABEL)),
                );
                return None;
            }
            decode_code::<E>(*code, &item_path, diags)
        })
        .collect();
    scalar::from_wire(&names, prior)
}
