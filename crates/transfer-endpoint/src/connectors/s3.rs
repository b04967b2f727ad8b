use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::common::Empty;
use transfer_api::s3::{
    self as wire, S3OutputEncoding, S3OutputFormat, UnexpectedFieldBehavior, s3_format,
};

use crate::connection::EmptyBlock;
use crate::diagnostics::{AttrPath, Diagnostics};
use crate::enums;
use crate::field::Field;
use crate::one_of::{self, exactly_one};
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

use super::ConnectorSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CsvFormat {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub delimiter: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub quote_char: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub escape_char: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub encoding: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub double_quote: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub newlines_in_values: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub block_size: Field<i64>,
    /// JSON object passed to the CSV reader
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub additional_reader_options: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub advanced_options: Field<String>,
}

impl CsvFormat {
    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> wire::Csv {
        wire::Csv {
            delimiter: scalar::to_wire(&self.delimiter, &path.child("delimiter"), diags),
            quote_char: scalar::to_wire(&self.quote_char, &path.child("quote_char"), diags),
            escape_char: scalar::to_wire(&self.escape_char, &path.child("escape_char"), diags),
            encoding: scalar::to_wire(&self.encoding, &path.child("encoding"), diags),
            double_quote: scalar::to_wire(&self.double_quote, &path.child("double_quote"), diags),
            newlines_in_values: scalar::to_wire(
                &self.newlines_in_values,
                &path.child("newlines_in_values"),
                diags,
            ),
            block_size: scalar::to_wire(&self.block_size, &path.child("block_size"), diags),
            additional_reader_options: scalar::to_wire(
                &self.additional_reader_options,
                &path.child("additional_reader_options"),
                diags,
            ),
            advanced_options: scalar::to_wire(
                &self.advanced_options,
                &path.child("advanced_options"),
                diags,
            ),
        }
    }

    fn from_wire(wire: &wire::Csv, prior: Option<&Self>) -> Self {
        Self {
            delimiter: scalar::from_wire(&wire.delimiter, &prior_field(prior, |p| &p.delimiter)),
            quote_char: scalar::from_wire(&wire.quote_char, &prior_field(prior, |p| &p.quote_char)),
            escape_char: scalar::from_wire(&wire.escape_char, &prior_field(prior, |p| &p.escape_char)),
            encoding: scalar::from_wire(&wire.encoding, &prior_field(prior, |p| &p.encoding)),
            double_quote: scalar::from_wire(&wire.double_quote, &prior_field(prior, |p| &p.double_quote)),
            newlines_in_values: scalar::from_wire(
                &wire.newlines_in_values,
                &prior_field(prior, |p| &p.newlines_in_values),
            ),
            block_size: scalar::from_wire(&wire.block_size, &prior_field(prior, |p| &p.block_size)),
            additional_reader_options: scalar::from_wire(
                &wire.additional_reader_options,
                &prior_field(prior, |p| &p.additional_reader_options),
            ),
            advanced_options: scalar::from_wire(
                &wire.advanced_options,
                &prior_field(prior, |p| &p.advanced_options),
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ParquetFormat {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub buffer_size: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub columns: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub batch_size: Field<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct JsonlFormat {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub newlines_in_values: Field<bool>,
    /// `IGNORE`, `INFER` or `ERROR`
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub unexpected_field_behavior: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub block_size: Field<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct S3Format {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv: Option<CsvFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parquet: Option<ParquetFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avro: Option<EmptyBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsonl: Option<JsonlFormat>,
}

impl S3Format {
    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Option<wire::S3Format> {
        if !exactly_one(
            path,
            &[
                ("csv", self.csv.is_some()),
                ("parquet", self.parquet.is_some()),
                ("avro", self.avro.is_some()),
                ("jsonl", self.jsonl.is_some()),
            ],
            diags,
        ) {
            return None;
        }
        let format = if let Some(csv) = &self.csv {
            s3_format::Format::Csv(csv.to_wire(&path.child("csv"), diags))
        } else if let Some(parquet) = &self.parquet {
            let path = path.child("parquet");
            s3_format::Format::Parquet(wire::Parquet {
                buffer_size: scalar::to_wire(&parquet.buffer_size, &path.child("buffer_size"), diags),
                columns: scalar::to_wire(&parquet.columns, &path.child("columns"), diags),
                batch_size: scalar::to_wire(&parquet.batch_size, &path.child("batch_size"), diags),
            })
        } else if let Some(jsonl) = &self.jsonl {
            let path = path.child("jsonl");
            s3_format::Format::Jsonl(wire::Jsonl {
                newlines_in_values: scalar::to_wire(
                    &jsonl.newlines_in_values,
                    &path.child("newlines_in_values"),
                    diags,
                ),
                unexpected_field_behavior: enums::encode::<UnexpectedFieldBehavior>(
                    &jsonl.unexpected_field_behavior,
                    &path.child("unexpected_field_behavior"),
                    diags,
                ),
                block_size: scalar::to_wire(&jsonl.block_size, &path.child("block_size"), diags),
            })
        } else {
            s3_format::Format::Avro(Empty {})
        };
        Some(wire::S3Format {
            format: Some(format),
        })
    }

    fn from_wire(
        wire: Option<&wire::S3Format>,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Option<Self> {
        let format = match wire.and_then(|f| f.format.as_ref()) {
            Some(format) => format,
            None => return prior.cloned(),
        };
        let mut flat = Self::default();
        match format {
            s3_format::Format::Csv(csv) => {
                flat.csv = Some(CsvFormat::from_wire(csv, prior.and_then(|p| p.csv.as_ref())));
            }
            s3_format::Format::Parquet(parquet) => {
                let prior = prior.and_then(|p| p.parquet.as_ref());
                flat.parquet = Some(ParquetFormat {
                    buffer_size: scalar::from_wire(
                        &parquet.buffer_size,
                        &prior_field(prior, |p| &p.buffer_size),
                    ),
                    columns: scalar::from_wire(&parquet.columns, &prior_field(prior, |p| &p.columns)),
                    batch_size: scalar::from_wire(
                        &parquet.batch_size,
                        &prior_field(prior, |p| &p.batch_size),
                    ),
                });
            }
            s3_format::Format::Avro(_) => flat.avro = Some(EmptyBlock {}),
            s3_format::Format::Jsonl(jsonl) => {
                let prior = prior.and_then(|p| p.jsonl.as_ref());
                flat.jsonl = Some(JsonlFormat {
                    newlines_in_values: scalar::from_wire(
                        &jsonl.newlines_in_values,
                        &prior_field(prior, |p| &p.newlines_in_values),
                    ),
                    unexpected_field_behavior: enums::decode::<UnexpectedFieldBehavior>(
                        jsonl.unexpected_field_behavior,
                        &path.child("jsonl").child("unexpected_field_behavior"),
                        diags,
                    ),
                    block_size: scalar::from_wire(&jsonl.block_size, &prior_field(prior, |p| &p.block_size)),
                });
            }
        }
        Some(flat)
    }
}

/// Bucket access of the S3 source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct S3Provider {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub bucket: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub aws_access_key_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub aws_secret_access_key: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub path_prefix: Field<String>,
    /// S3 compatible endpoint, AWS when absent
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub endpoint: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub use_ssl: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub verify_ssl_cert: Field<bool>,
}

impl S3Provider {
    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> wire::S3Provider {
        wire::S3Provider {
            bucket: scalar::required_to_wire(&self.bucket, &path.child("bucket"), diags),
            aws_access_key_id: scalar::to_wire(
                &self.aws_access_key_id,
                &path.child("aws_access_key_id"),
                diags,
            ),
            aws_secret_access_key: secret::to_wire(
                &self.aws_secret_access_key,
                &path.child("aws_secret_access_key"),
                diags,
            ),
            path_prefix: scalar::to_wire(&self.path_prefix, &path.child("path_prefix"), diags),
            endpoint: scalar::to_wire(&self.endpoint, &path.child("endpoint"), diags),
            use_ssl: scalar::to_wire(&self.use_ssl, &path.child("use_ssl"), diags),
            verify_ssl_cert: scalar::to_wire(&self.verify_ssl_cert, &path.child("verify_ssl_cert"), diags),
        }
    }

    fn from_wire(wire: &wire::S3Provider, prior: Option<&Self>) -> Self {
        Self {
            bucket: scalar::from_wire(&wire.bucket, &prior_field(prior, |p| &p.bucket)),
            aws_access_key_id: scalar::from_wire(
                &wire.aws_access_key_id,
                &prior_field(prior, |p| &p.aws_access_key_id),
            ),
            aws_secret_access_key: secret::from_wire(
                wire.aws_secret_access_key.as_ref(),
                &prior_field(prior, |p| &p.aws_secret_access_key),
            ),
            path_prefix: scalar::from_wire(&wire.path_prefix, &prior_field(prior, |p| &p.path_prefix)),
            endpoint: scalar::from_wire(&wire.endpoint, &prior_field(prior, |p| &p.endpoint)),
            use_ssl: scalar::from_wire(&wire.use_ssl, &prior_field(prior, |p| &p.use_ssl)),
            verify_ssl_cert: scalar::from_wire(
                &wire.verify_ssl_cert,
                &prior_field(prior, |p| &p.verify_ssl_cert),
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct S3Source {
    /// name of the resulting table
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub dataset: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub path_pattern: Field<String>,
    /// JSON schema of the records, inferred when absent
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub schema: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<S3Format>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<S3Provider>,
}

impl ConnectorSettings for S3Source {
    const NAME: &'static str = "s3_source";

    type Wire = wire::S3Source;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::S3Source {
            dataset: scalar::required_to_wire(&self.dataset, &path.child("dataset"), diags),
            path_pattern: scalar::required_to_wire(&self.path_pattern, &path.child("path_pattern"), diags),
            schema: scalar::to_wire(&self.schema, &path.child("schema"), diags),
            format: one_of::required(self.format.as_ref(), "format", path, diags)
                .and_then(|format| format.to_wire(&path.child("format"), diags)),
            provider: one_of::required(self.provider.as_ref(), "provider", path, diags)
                .map(|provider| provider.to_wire(&path.child("provider"), diags)),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        let prior_provider = prior.and_then(|p| p.provider.as_ref());
        Self {
            dataset: scalar::from_wire(&wire.dataset, &prior_field(prior, |p| &p.dataset)),
            path_pattern: scalar::from_wire(&wire.path_pattern, &prior_field(prior, |p| &p.path_pattern)),
            schema: scalar::from_wire(&wire.schema, &prior_field(prior, |p| &p.schema)),
            format: S3Format::from_wire(
                wire.format.as_ref(),
                prior.and_then(|p| p.format.as_ref()),
                &path.child("format"),
                diags,
            ),
            provider: match &wire.provider {
                Some(provider) => Some(S3Provider::from_wire(provider, prior_provider)),
                None => prior_provider.cloned(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct S3Target {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub bucket_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub bucket_path: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub region: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub endpoint: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub aws_access_key_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub aws_secret_access_key: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub output_format: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub output_encoding: Field<String>,
    /// flush threshold, e.g. `128MB`
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub buffer_size: Field<String>,
    /// flush interval, e.g. `30s`
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub buffer_interval: Field<String>,
}

impl ConnectorSettings for S3Target {
    const NAME: &'static str = "s3_target";

    type Wire = wire::S3Target;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::S3Target {
            bucket_name: scalar::required_to_wire(&self.bucket_name, &path.child("bucket_name"), diags),
            bucket_path: scalar::to_wire(&self.bucket_path, &path.child("bucket_path"), diags),
            region: scalar::to_wire(&self.region, &path.child("region"), diags),
            endpoint: scalar::to_wire(&self.endpoint, &path.child("endpoint"), diags),
            aws_access_key_id: scalar::to_wire(
                &self.aws_access_key_id,
                &path.child("aws_access_key_id"),
                diags,
            ),
            aws_secret_access_key: secret::to_wire(
                &self.aws_secret_access_key,
                &path.child("aws_secret_access_key"),
                diags,
            ),
            output_format: enums::encode::<S3OutputFormat>(
                &self.output_format,
                &path.child("output_format"),
                diags,
            ),
            output_encoding: enums::encode::<S3OutputEncoding>(
                &self.output_encoding,
                &path.child("output_encoding"),
                diags,
            ),
            buffer_size: scalar::to_wire(&self.buffer_size, &path.child("buffer_size"), diags),
            buffer_interval: scalar::to_wire(&self.buffer_interval, &path.child("buffer_interval"), diags),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        Self {
            bucket_name: scalar::from_wire(&wire.bucket_name, &prior_field(prior, |p| &p.bucket_name)),
            bucket_path: scalar::from_wire(&wire.bucket_path, &prior_field(prior, |p| &p.bucket_path)),
            region: scalar::from_wire(&wire.region, &prior_field(prior, |p| &p.region)),
            endpoint: scalar::from_wire(&wire.endpoint, &prior_field(prior, |p| &p.endpoint)),
            aws_access_key_id: scalar::from_wire(
                &wire.aws_access_key_id,
                &prior_field(prior, |p| &p.aws_access_key_id),
            ),
            aws_secret_access_key: secret::from_wire(
                wire.aws_secret_access_key.as_ref(),
                &prior_field(prior, |p| &p.aws_secret_access_key),
            ),
            output_format: enums::decode::<S3OutputFormat>(
                wire.output_format,
                &path.child("output_format"),
                diags,
            ),
            output_encoding: enums::decode::<S3OutputEncoding>(
                wire.output_encoding,
                &path.child("output_encoding"),
                diags,
            ),
            buffer_size: scalar::from_wire(&wire.buffer_size, &prior_field(prior, |p| &p.buffer_size)),
            buffer_interval: scalar::from_wire(
                &wire.buffer_interval,
                &prior_field(prior, |p| &p.buffer_interval),
            ),
        }
    }
}
