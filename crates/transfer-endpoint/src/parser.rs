//!
//! # Record parsers
//!
//! Streaming sources may parse message payloads into columns. The parser is a
//! one-of of `json_parser` and `tskv_parser`, both described by a data schema
//! which is itself a one-of of an explicit column list and a raw JSON document.
//!
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::common::{self as wire, data_schema, parser};
use transfer_api::common::ColumnType;

use crate::diagnostics::{AttrPath, Diagnostics};
use crate::enums;
use crate::field::Field;
use crate::one_of::{self, exactly_one};
use crate::scalar::{self, prior_field};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Parser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_parser: Option<GenericParser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tskv_parser: Option<GenericParser>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GenericParser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_schema: Option<DataSchema>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub null_keys_allowed: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub add_rest_column: Field<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DataSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<ColumnSchema>>,
    /// schema as a JSON document
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub json_fields: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ColumnSchema {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(rename = "type", skip_serializing_if = "Field::is_absent")]
    pub column_type: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub key: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub required: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub path: Field<String>,
}

/// an absent parser leaves payloads unparsed
pub fn to_wire(flat: Option<&Parser>, path: &AttrPath, diags: &mut Diagnostics) -> Option<wire::Parser> {
    let parser = flat?;
    if !exactly_one(
        path,
        &[
            ("json_parser", parser.json_parser.is_some()),
            ("tskv_parser", parser.tskv_parser.is_some()),
        ],
        diags,
    ) {
        return None;
    }
    let parser = if let Some(json) = &parser.json_parser {
        parser::Parser::JsonParser(generic_to_wire(json, &path.child("json_parser"), diags))
    } else if let Some(tskv) = &parser.tskv_parser {
        parser::Parser::TskvParser(generic_to_wire(tskv, &path.child("tskv_parser"), diags))
    } else {
        return None;
    };
    Some(wire::Parser {
        parser: Some(parser),
    })
}

pub fn from_wire(
    wire: Option<&wire::Parser>,
    prior: Option<&Parser>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Option<Parser> {
    match wire.and_then(|parser| parser.parser.as_ref()) {
        Some(parser::Parser::JsonParser(json)) => Some(Parser {
            json_parser: Some(generic_from_wire(
                json,
                prior.and_then(|p| p.json_parser.as_ref()),
                &path.child("json_parser"),
                diags,
            )),
            tskv_parser: None,
        }),
        Some(parser::Parser::TskvParser(tskv)) => Some(Parser {
            json_parser: None,
            tskv_parser: Some(generic_from_wire(
                tskv,
                prior.and_then(|p| p.tskv_parser.as_ref()),
                &path.child("tskv_parser"),
                diags,
            )),
        }),
        None => prior.cloned(),
    }
}

fn generic_to_wire(flat: &GenericParser, path: &AttrPath, diags: &mut Diagnostics) -> wire::GenericParser {
    let data_schema = one_of::required(flat.data_schema.as_ref(), "data_schema", path, diags)
        .and_then(|schema| schema_to_wire(schema, &path.child("data_schema"), diags));
    wire::GenericParser {
        data_schema,
        null_keys_allowed: scalar::to_wire(
            &flat.null_keys_allowed,
            &path.child("null_keys_allowed"),
            diags,
        ),
        add_rest_column: scalar::to_wire(&flat.add_rest_column, &path.child("add_rest_column"), diags),
    }
}

fn generic_from_wire(
    wire: &wire::GenericParser,
    prior: Option<&GenericParser>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> GenericParser {
    let prior_schema = prior.and_then(|p| p.data_schema.as_ref());
    let data_schema = match wire.data_schema.as_ref().and_then(|s| s.schema.as_ref()) {
        Some(data_schema::Schema::Fields(list)) => Some(DataSchema {
            fields: Some(
                list.fields
                    .iter()
                    .enumerate()
                    .map(|(idx, column)| {
                        let prior_column = prior_schema
                            .and_then(|s| s.fields.as_ref())
                            .and_then(|fields| fields.get(idx));
                        column_from_wire(
                            column,
                            prior_column,
                            &path.child("data_schema").child("fields").index(idx),
                            diags,
                        )
                    })
                    .collect(),
            ),
            json_fields: Field::Absent,
        }),
        Some(data_schema::Schema::JsonFields(json)) => Some(DataSchema {
            fields: None,
            json_fields: scalar::from_wire(json, &prior_field(prior_schema, |s| &s.json_fields)),
        }),
        None => prior_schema.cloned(),
    };
    GenericParser {
        data_schema,
        null_keys_allowed: scalar::from_wire(
            &wire.null_keys_allowed,
            &prior_field(prior, |p| &p.null_keys_allowed),
        ),
        add_rest_column: scalar::from_wire(
            &wire.add_rest_column,
            &prior_field(prior, |p| &p.add_rest_column),
        ),
    }
}

fn schema_to_wire(flat: &DataSchema, path: &AttrPath, diags: &mut Diagnostics) -> Option<wire::DataSchema> {
    if !exactly_one(
        path,
        &[
            ("fields", flat.fields.is_some()),
            ("json_fields", !flat.json_fields.is_absent()),
        ],
        diags,
    ) {
        return None;
    }
    let schema = match &flat.fields {
        Some(fields) => data_schema::Schema::Fields(wire::FieldList {
            fields: fields
                .iter()
                .enumerate()
                .map(|(idx, column)| column_to_wire(column, &path.child("fields").index(idx), diags))
                .collect(),
        }),
        None => data_schema::Schema::JsonFields(scalar::to_wire(
            &flat.json_fields,
            &path.child("json_fields"),
            diags,
        )),
    };
    Some(wire::DataSchema {
        schema: Some(schema),
    })
}

fn column_to_wire(flat: &ColumnSchema, path: &AttrPath, diags: &mut Diagnostics) -> wire::ColSchema {
    wire::ColSchema {
        name: scalar::required_to_wire(&flat.name, &path.child("name"), diags),
        column_type: enums::encode::<ColumnType>(&flat.column_type, &path.child("type"), diags),
        key: scalar::to_wire(&flat.key, &path.child("key"), diags),
        required: scalar::to_wire(&flat.required, &path.child("required"), diags),
        path: scalar::to_wire(&flat.path, &path.child("path"), diags),
    }
}

fn column_from_wire(
    wire: &wire::ColSchema,
    prior: Option<&ColumnSchema>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> ColumnSchema {
    ColumnSchema {
        name: scalar::from_wire(&wire.name, &prior_field(prior, |c| &c.name)),
        column_type: enums::decode::<ColumnType>(wire.column_type, &path.child("type"), diags),
        key: scalar::from_wire(&wire.key, &prior_field(prior, |c| &c.key)),
        required: scalar::from_wire(&wire.required, &prior_field(prior, |c| &c.required)),
        path: scalar::from_wire(&wire.path, &prior_field(prior, |c| &c.path)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn json_parser() -> Parser {
        Parser {
            json_parser: Some(GenericParser {
                data_schema: Some(DataSchema {
                    fields: Some(vec![
                        ColumnSchema {
                            name: "id".into(),
                            column_type: "int64".into(),
                            key: Field::Known(true),
                            required: Field::Known(true),
                            path: Field::Absent,
                        },
                        ColumnSchema {
                            name: "payload".into(),
                            column_type: "ANY".into(),
                            ..Default::default()
                        },
                    ]),
                    json_fields: Field::Absent,
                }),
                null_keys_allowed: Field::Known(false),
                add_rest_column: Field::Known(true),
            }),
            tskv_parser: None,
        }
    }

    #[test]
    fn test_json_parser_round_trip() {
        //given
        let flat = json_parser();
        let mut diags = Diagnostics::new();
        let path = AttrPath::root("parser");

        //when
        let wire = to_wire(Some(&flat), &path, &mut diags);
        let back = from_wire(wire.as_ref(), Some(&flat), &path, &mut diags);

        //then
        assert!(diags.is_empty());
        let mut expected = flat;
        if let Some(fields) = expected
            .json_parser
            .as_mut()
            .and_then(|p| p.data_schema.as_mut())
            .and_then(|s| s.fields.as_mut())
        {
            fields[0].column_type = "INT64".into();
        }
        assert_eq!(back, Some(expected));
    }

    #[test]
    fn test_absent_parser() {
        let mut diags = Diagnostics::new();
        assert_eq!(to_wire(None, &AttrPath::root("parser"), &mut diags), None);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_data_schema_is_required() {
        let mut diags = Diagnostics::new();
        let flat = Parser {
            tskv_parser: Some(GenericParser::default()),
            ..Default::default()
        };
        to_wire(Some(&flat), &AttrPath::root("parser"), &mut diags);
        assert_eq!(
            diags.to_string(),
            "error: parser.tskv_parser: missing required block `data_schema`"
        );
    }

    #[test]
    fn test_unknown_column_type() {
        let mut diags = Diagnostics::new();
        let flat = Parser {
            json_parser: Some(GenericParser {
                data_schema: Some(DataSchema {
                    fields: Some(vec![ColumnSchema {
                        name: "id".into(),
                        column_type: "bigint".into(),
                        ..Default::default()
                    }]),
                    json_fields: Field::Absent,
                }),
                ..Default::default()
            }),
            tskv_parser: None,
        };
        to_wire(Some(&flat), &AttrPath::root("parser"), &mut diags);
        let errors: Vec<_> = diags.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].path.as_str(),
            "parser.json_parser.data_schema.fields[0].type"
        );
    }
}
