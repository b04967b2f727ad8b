//!
//! # Connector settings
//!
//! One flat type per connector variant, each converting to and from its wire
//! settings message through [`ConnectorSettings`].
//!
use crate::diagnostics::{AttrPath, Diagnostics};

/// Conversion between a flat connector block and its wire settings.
///
/// `to_wire` reports every problem it finds into `diags` and still returns a
/// message; the caller drops it when an error was recorded.
/// `from_wire` builds a new flat value from the server response, falling back
/// to `prior` for everything the server does not echo, secrets in particular.
pub trait ConnectorSettings: Sized {
    /// flat attribute name, also the root of diagnostic paths
    const NAME: &'static str;

    type Wire;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire;

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self;
}

/// Flat staged object transfer block, one stage name per object kind.
/// A missing block leaves every stage at its server default.
macro_rules! object_transfer_settings {
    ($(#[$meta:meta])* $name:ident => $wire:path { $($stage:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::schemars::JsonSchema,
        )]
        #[serde(default)]
        pub struct $name {
            $(
                #[serde(skip_serializing_if = "crate::field::Field::is_absent")]
                pub $stage: $crate::field::Field<String>,
            )+
        }

        impl $name {
            pub fn to_wire(
                &self,
                path: &$crate::diagnostics::AttrPath,
                diags: &mut $crate::diagnostics::Diagnostics,
            ) -> $wire {
                $wire {
                    $(
                        $stage: $crate::enums::encode::<::transfer_api::common::ObjectTransferStage>(
                            &self.$stage,
                            &path.child(stringify!($stage).trim_start_matches("r#")),
                            diags,
                        ),
                    )+
                }
            }

            /// a block of unspecified stages the author never wrote stays absent
            pub fn from_wire(
                wire: Option<&$wire>,
                prior: Option<&Self>,
                path: &$crate::diagnostics::AttrPath,
                diags: &mut $crate::diagnostics::Diagnostics,
            ) -> Option<Self> {
                let wire = match wire {
                    Some(wire) if prior.is_some() || *wire != Default::default() => wire,
                    _ => return prior.cloned(),
                };
                Some(Self {
                    $(
                        $stage: $crate::enums::decode::<::transfer_api::common::ObjectTransferStage>(
                            wire.$stage,
                            &path.child(stringify!($stage).trim_start_matches("r#")),
                            diags,
                        ),
                    )+
                })
            }
        }
    };
}

pub mod clickhouse;
pub mod kafka;
pub mod kinesis;
pub mod mongo;
pub mod mysql;
pub mod postgres;
pub mod s3;
pub mod saas;
pub mod search;
pub mod warehouse;
