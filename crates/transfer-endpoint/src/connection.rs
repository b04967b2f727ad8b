//!
//! # Connection resolvers
//!
//! Database and queue connectors address their server through a one-of
//! block: a managed cluster reference, a self-hosted address list or, for
//! MongoDB, a DNS SRV record. TLS applies to self-hosted addresses only.
//!
//! Resolvers check that exactly one arm is populated. Reading back keeps the
//! arm the server reports and never invents a self-hosted block.
//!
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::trace;

use transfer_api::clickhouse::{self as ch_wire, clickhouse_connection};
use transfer_api::common::{self as wire, host_connection, tls_mode};
use transfer_api::kafka::{self as kafka_wire, kafka_connection};
use transfer_api::mongo::{self as mongo_wire, mongo_connection};

use crate::diagnostics::{AttrPath, DiagnosticKind, Diagnostics};
use crate::field::Field;
use crate::one_of::{self, exactly_one};
use crate::scalar::{self, prior_field};

/// block without attributes, `disabled {}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EmptyBlock {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TlsMode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<EmptyBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<TlsEnabled>,
}

impl TlsMode {
    pub fn disabled() -> Self {
        Self {
            disabled: Some(EmptyBlock {}),
            enabled: None,
        }
    }

    pub fn enabled(ca_certificate: Field<String>) -> Self {
        Self {
            disabled: None,
            enabled: Some(TlsEnabled { ca_certificate }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TlsEnabled {
    /// PEM encoded CA certificate, the system pool is used when absent
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub ca_certificate: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ManagedCluster {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub cluster_id: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SelfHosted {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub hosts: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub port: Field<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_mode: Option<TlsMode>,
}

/// Connection of relational and search connectors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HostConnection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_cluster: Option<ManagedCluster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_hosted: Option<SelfHosted>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MongoSelfHosted {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub hosts: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub port: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub replica_set: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_mode: Option<TlsMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DnsSrv {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub hostname: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MongoConnection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_cluster: Option<ManagedCluster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_hosted: Option<MongoSelfHosted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_srv: Option<DnsSrv>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ClickhouseShard {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub hosts: Field<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ClickhouseSelfHosted {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub shards: Field<Vec<ClickhouseShard>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub http_port: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub native_port: Field<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_mode: Option<TlsMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ClickhouseConnection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_cluster: Option<ManagedCluster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_hosted: Option<ClickhouseSelfHosted>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KafkaSelfHosted {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub broker_urls: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_mode: Option<TlsMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KafkaConnection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_cluster: Option<ManagedCluster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_hosted: Option<KafkaSelfHosted>,
}

// -----------------------------------
//  TLS
// -----------------------------------

fn wire_tls_disabled() -> wire::TlsMode {
    wire::TlsMode {
        mode: Some(tls_mode::Mode::Disabled(wire::Empty {})),
    }
}

/// missing TLS block means disabled
pub fn tls_to_wire(
    flat: Option<&TlsMode>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Option<wire::TlsMode> {
    let Some(tls) = flat else {
        return Some(wire_tls_disabled());
    };
    if !exactly_one(
        path,
        &[
            ("disabled", tls.disabled.is_some()),
            ("enabled", tls.enabled.is_some()),
        ],
        diags,
    ) {
        return None;
    }
    match &tls.enabled {
        Some(enabled) => Some(wire::TlsMode {
            mode: Some(tls_mode::Mode::Enabled(wire::TlsConfig {
                ca_certificate: scalar::to_wire(
                    &enabled.ca_certificate,
                    &path.child("enabled").child("ca_certificate"),
                    diags,
                ),
            })),
        }),
        None => Some(wire_tls_disabled()),
    }
}

/// an unset wire TLS mode reads back as `disabled {}`
pub fn tls_from_wire(wire: Option<&wire::TlsMode>, prior: Option<&TlsMode>) -> TlsMode {
    match wire.and_then(|tls| tls.mode.as_ref()) {
        Some(tls_mode::Mode::Enabled(config)) => {
            let prior_ca = prior_field(
                prior.and_then(|tls| tls.enabled.as_ref()),
                |enabled| &enabled.ca_certificate,
            );
            TlsMode::enabled(scalar::from_wire(&config.ca_certificate, &prior_ca))
        }
        Some(tls_mode::Mode::Disabled(_)) | None => TlsMode::disabled(),
    }
}

// -----------------------------------
//  Shared arms
// -----------------------------------

fn cluster_id_to_wire(cluster: &ManagedCluster, path: &AttrPath, diags: &mut Diagnostics) -> String {
    scalar::required_to_wire(&cluster.cluster_id, &path.child("cluster_id"), diags)
}

fn cluster_from_wire(cluster_id: &str, prior: Option<&ManagedCluster>) -> ManagedCluster {
    ManagedCluster {
        cluster_id: scalar::from_wire(
            &cluster_id.to_owned(),
            &prior_field(prior, |cluster| &cluster.cluster_id),
        ),
    }
}

/// address lists must name at least one host
fn hosts_to_wire(hosts: &Field<Vec<String>>, path: &AttrPath, diags: &mut Diagnostics) -> Vec<String> {
    let hosts_wire = scalar::required_to_wire(hosts, path, diags);
    if hosts.is_known() && hosts_wire.is_empty() {
        diags.error(
            path,
            DiagnosticKind::InvalidValue("at least one host is required".to_owned()),
        );
    }
    hosts_wire
}

// -----------------------------------
//  Relational and search
// -----------------------------------

fn self_hosted_to_wire(hosted: &SelfHosted, path: &AttrPath, diags: &mut Diagnostics) -> wire::OnPremise {
    wire::OnPremise {
        hosts: hosts_to_wire(&hosted.hosts, &path.child("hosts"), diags),
        port: scalar::port_to_wire(&hosted.port, &path.child("port"), diags),
        tls_mode: tls_to_wire(hosted.tls_mode.as_ref(), &path.child("tls_mode"), diags),
    }
}

fn self_hosted_from_wire(wire: &wire::OnPremise, prior: Option<&SelfHosted>) -> SelfHosted {
    SelfHosted {
        hosts: scalar::from_wire(&wire.hosts, &prior_field(prior, |hosted| &hosted.hosts)),
        port: scalar::from_wire(&wire.port, &prior_field(prior, |hosted| &hosted.port)),
        tls_mode: Some(tls_from_wire(
            wire.tls_mode.as_ref(),
            prior.and_then(|hosted| hosted.tls_mode.as_ref()),
        )),
    }
}

/// `path` is the connector path, the block is reported as `connection`
pub fn host_connection_to_wire(
    flat: Option<&HostConnection>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Option<wire::HostConnection> {
    let conn = one_of::required(flat, "connection", path, diags)?;
    let path = path.child("connection");
    if !exactly_one(
        &path,
        &[
            ("managed_cluster", conn.managed_cluster.is_some()),
            ("self_hosted", conn.self_hosted.is_some()),
        ],
        diags,
    ) {
        return None;
    }

    let connection = if let Some(cluster) = &conn.managed_cluster {
        host_connection::Connection::ClusterId(cluster_id_to_wire(
            cluster,
            &path.child("managed_cluster"),
            diags,
        ))
    } else if let Some(hosted) = &conn.self_hosted {
        host_connection::Connection::OnPremise(self_hosted_to_wire(
            hosted,
            &path.child("self_hosted"),
            diags,
        ))
    } else {
        return None;
    };
    trace!(%path, "resolved host connection");
    Some(wire::HostConnection {
        connection: Some(connection),
    })
}

/// a connection the server did not echo keeps the prior block
pub fn host_connection_from_wire(
    wire: Option<&wire::HostConnection>,
    prior: Option<&HostConnection>,
) -> Option<HostConnection> {
    match wire.and_then(|conn| conn.connection.as_ref()) {
        Some(host_connection::Connection::ClusterId(cluster_id)) => Some(HostConnection {
            managed_cluster: Some(cluster_from_wire(
                cluster_id,
                prior.and_then(|conn| conn.managed_cluster.as_ref()),
            )),
            self_hosted: None,
        }),
        Some(host_connection::Connection::OnPremise(on_premise)) => Some(HostConnection {
            managed_cluster: None,
            self_hosted: Some(self_hosted_from_wire(
                on_premise,
                prior.and_then(|conn| conn.self_hosted.as_ref()),
            )),
        }),
        None => prior.cloned(),
    }
}

// -----------------------------------
//  MongoDB
// -----------------------------------

pub fn mongo_connection_to_wire(
    flat: Option<&MongoConnection>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Option<mongo_wire::MongoConnection> {
    let conn = one_of::required(flat, "connection", path, diags)?;
    let path = path.child("connection");
    if !exactly_one(
        &path,
        &[
            ("managed_cluster", conn.managed_cluster.is_some()),
            ("self_hosted", conn.self_hosted.is_some()),
            ("dns_srv", conn.dns_srv.is_some()),
        ],
        diags,
    ) {
        return None;
    }

    let connection = if let Some(cluster) = &conn.managed_cluster {
        mongo_connection::Connection::ClusterId(cluster_id_to_wire(
            cluster,
            &path.child("managed_cluster"),
            diags,
        ))
    } else if let Some(hosted) = &conn.self_hosted {
        let path = path.child("self_hosted");
        mongo_connection::Connection::OnPremise(mongo_wire::MongoOnPremise {
            hosts: hosts_to_wire(&hosted.hosts, &path.child("hosts"), diags),
            port: scalar::port_to_wire(&hosted.port, &path.child("port"), diags),
            replica_set: scalar::to_wire(&hosted.replica_set, &path.child("replica_set"), diags),
            tls_mode: tls_to_wire(hosted.tls_mode.as_ref(), &path.child("tls_mode"), diags),
        })
    } else if let Some(srv) = &conn.dns_srv {
        mongo_connection::Connection::Srv(mongo_wire::MongoSrv {
            hostname: scalar::required_to_wire(
                &srv.hostname,
                &path.child("dns_srv").child("hostname"),
                diags,
            ),
        })
    } else {
        return None;
    };
    Some(mongo_wire::MongoConnection {
        connection: Some(connection),
    })
}

pub fn mongo_connection_from_wire(
    wire: Option<&mongo_wire::MongoConnection>,
    prior: Option<&MongoConnection>,
) -> Option<MongoConnection> {
    let connection = match wire.and_then(|conn| conn.connection.as_ref()) {
        Some(connection) => connection,
        None => return prior.cloned(),
    };
    let mut flat = MongoConnection::default();
    match connection {
        mongo_connection::Connection::ClusterId(cluster_id) => {
            flat.managed_cluster = Some(cluster_from_wire(
                cluster_id,
                prior.and_then(|conn| conn.managed_cluster.as_ref()),
            ));
        }
        mongo_connection::Connection::OnPremise(on_premise) => {
            let prior = prior.and_then(|conn| conn.self_hosted.as_ref());
            flat.self_hosted = Some(MongoSelfHosted {
                hosts: scalar::from_wire(&on_premise.hosts, &prior_field(prior, |h| &h.hosts)),
                port: scalar::from_wire(&on_premise.port, &prior_field(prior, |h| &h.port)),
                replica_set: scalar::from_wire(
                    &on_premise.replica_set,
                    &prior_field(prior, |h| &h.replica_set),
                ),
                tls_mode: Some(tls_from_wire(
                    on_premise.tls_mode.as_ref(),
                    prior.and_then(|h| h.tls_mode.as_ref()),
                )),
            });
        }
        mongo_connection::Connection::Srv(srv) => {
            flat.dns_srv = Some(DnsSrv {
                hostname: scalar::from_wire(
                    &srv.hostname,
                    &prior_field(prior.and_then(|conn| conn.dns_srv.as_ref()), |srv| {
                        &srv.hostname
                    }),
                ),
            });
        }
    }
    Some(flat)
}

// -----------------------------------
//  ClickHouse
// -----------------------------------

fn shards_to_wire(
    shards: &Field<Vec<ClickhouseShard>>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Vec<ch_wire::ClickhouseShard> {
    let shards_wire = scalar::records_to_wire(shards, path, diags, |shard, path, diags| {
        ch_wire::ClickhouseShard {
            name: scalar::required_to_wire(&shard.name, &path.child("name"), diags),
            hosts: hosts_to_wire(&shard.hosts, &path.child("hosts"), diags),
        }
    });
    if shards_wire.is_empty() && !shards.is_unresolved() {
        diags.error(
            path,
            DiagnosticKind::InvalidValue("at least one shard is required".to_owned()),
        );
    }
    shards_wire
}

pub fn clickhouse_connection_to_wire(
    flat: Option<&ClickhouseConnection>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Option<ch_wire::ClickhouseConnection> {
    let conn = one_of::required(flat, "connection", path, diags)?;
    let path = path.child("connection");
    if !exactly_one(
        &path,
        &[
            ("managed_cluster", conn.managed_cluster.is_some()),
            ("self_hosted", conn.self_hosted.is_some()),
        ],
        diags,
    ) {
        return None;
    }

    let connection = if let Some(cluster) = &conn.managed_cluster {
        clickhouse_connection::Connection::ClusterId(cluster_id_to_wire(
            cluster,
            &path.child("managed_cluster"),
            diags,
        ))
    } else if let Some(hosted) = &conn.self_hosted {
        let path = path.child("self_hosted");
        clickhouse_connection::Connection::OnPremise(ch_wire::ClickhouseOnPremise {
            shards: shards_to_wire(&hosted.shards, &path.child("shards"), diags),
            http_port: scalar::port_to_wire(&hosted.http_port, &path.child("http_port"), diags),
            native_port: scalar::port_to_wire(
                &hosted.native_port,
                &path.child("native_port"),
                diags,
            ),
            tls_mode: tls_to_wire(hosted.tls_mode.as_ref(), &path.child("tls_mode"), diags),
        })
    } else {
        return None;
    };
    Some(ch_wire::ClickhouseConnection {
        connection: Some(connection),
    })
}

pub fn clickhouse_connection_from_wire(
    wire: Option<&ch_wire::ClickhouseConnection>,
    prior: Option<&ClickhouseConnection>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Option<ClickhouseConnection> {
    match wire.and_then(|conn| conn.connection.as_ref()) {
        Some(clickhouse_connection::Connection::ClusterId(cluster_id)) => {
            Some(ClickhouseConnection {
                managed_cluster: Some(cluster_from_wire(
                    cluster_id,
                    prior.and_then(|conn| conn.managed_cluster.as_ref()),
                )),
                self_hosted: None,
            })
        }
        Some(clickhouse_connection::Connection::OnPremise(on_premise)) => {
            let prior = prior.and_then(|conn| conn.self_hosted.as_ref());
            let shards = scalar::records_from_wire(
                &on_premise.shards,
                &prior_field(prior, |hosted| &hosted.shards),
                &path.child("connection").child("self_hosted").child("shards"),
                diags,
                |shard, prior_shard, _, _| ClickhouseShard {
                    name: scalar::from_wire(&shard.name, &prior_field(prior_shard, |s| &s.name)),
                    hosts: scalar::from_wire(&shard.hosts, &prior_field(prior_shard, |s| &s.hosts)),
                },
            );
            Some(ClickhouseConnection {
                managed_cluster: None,
                self_hosted: Some(ClickhouseSelfHosted {
                    shards,
                    http_port: scalar::from_wire(
                        &on_premise.http_port,
                        &prior_field(prior, |h| &h.http_port),
                    ),
                    native_port: scalar::from_wire(
                        &on_premise.native_port,
                        &prior_field(prior, |h| &h.native_port),
                    ),
                    tls_mode: Some(tls_from_wire(
                        on_premise.tls_mode.as_ref(),
                        prior.and_then(|h| h.tls_mode.as_ref()),
                    )),
                }),
            })
        }
        None => prior.cloned(),
    }
}

// -----------------------------------
//  Kafka
// -----------------------------------

pub fn kafka_connection_to_wire(
    flat: Option<&KafkaConnection>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Option<kafka_wire::KafkaConnection> {
    let conn = one_of::required(flat, "connection", path, diags)?;
    let path = path.child("connection");
    if !exactly_one(
        &path,
        &[
            ("managed_cluster", conn.managed_cluster.is_some()),
            ("self_hosted", conn.self_hosted.is_some()),
        ],
        diags,
    ) {
        return None;
    }

    let connection = if let Some(cluster) = &conn.managed_cluster {
        kafka_connection::Connection::ClusterId(cluster_id_to_wire(
            cluster,
            &path.child("managed_cluster"),
            diags,
        ))
    } else if let Some(hosted) = &conn.self_hosted {
        let path = path.child("self_hosted");
        kafka_connection::Connection::OnPremise(kafka_wire::KafkaOnPremise {
            broker_urls: hosts_to_wire(&hosted.broker_urls, &path.child("broker_urls"), diags),
            tls_mode: tls_to_wire(hosted.tls_mode.as_ref(), &path.child("tls_mode"), diags),
        })
    } else {
        return None;
    };
    Some(kafka_wire::KafkaConnection {
        connection: Some(connection),
    })
}

pub fn kafka_connection_from_wire(
    wire: Option<&kafka_wire::KafkaConnection>,
    prior: Option<&KafkaConnection>,
) -> Option<KafkaConnection> {
    match wire.and_then(|conn| conn.connection.as_ref()) {
        Some(kafka_connection::Connection::ClusterId(cluster_id)) => Some(KafkaConnection {
            managed_cluster: Some(cluster_from_wire(
                cluster_id,
                prior.and_then(|conn| conn.managed_cluster.as_ref()),
            )),
            self_hosted: None,
        }),
        Some(kafka_connection::Connection::OnPremise(on_premise)) => {
            let prior = prior.and_then(|conn| conn.self_hosted.as_ref());
            Some(KafkaConnection {
                managed_cluster: None,
                self_hosted: Some(KafkaSelfHosted {
                    broker_urls: scalar::from_wire(
                        &on_premise.broker_urls,
                        &prior_field(prior, |h| &h.broker_urls),
                    ),
                    tls_mode: Some(tls_from_wire(
                        on_premise.tls_mode.as_ref(),
                        prior.and_then(|h| h.tls_mode.as_ref()),
                    )),
                }),
            })
        }
        None => prior.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn self_hosted(hosts: &[&str], port: i64, tls_mode: Option<TlsMode>) -> HostConnection {
        HostConnection {
            managed_cluster: None,
            self_hosted: Some(SelfHosted {
                hosts: Field::Known(hosts.iter().map(|h| h.to_string()).collect()),
                port: Field::Known(port),
                tls_mode,
            }),
        }
    }

    #[test]
    fn test_no_tls_mode_is_disabled() {
        //given
        let flat = self_hosted(&["h1", "h2"], 5432, None);
        let mut diags = Diagnostics::new();

        //when
        let wire = host_connection_to_wire(Some(&flat), &AttrPath::root("pg"), &mut diags);

        //then
        assert!(diags.is_empty());
        assert_eq!(
            wire,
            Some(wire::HostConnection {
                connection: Some(host_connection::Connection::OnPremise(wire::OnPremise {
                    hosts: vec!["h1".to_owned(), "h2".to_owned()],
                    port: 5432,
                    tls_mode: Some(wire_tls_disabled()),
                })),
            })
        );
    }

    #[test]
    fn test_ca_certificate_changes_only_tls() {
        //given
        let flat = self_hosted(
            &["h1", "h2"],
            5432,
            Some(TlsMode::enabled("PEM...".into())),
        );
        let mut diags = Diagnostics::new();

        //when
        let wire = host_connection_to_wire(Some(&flat), &AttrPath::root("pg"), &mut diags)
            .and_then(|conn| conn.connection);

        //then
        assert!(diags.is_empty());
        let Some(host_connection::Connection::OnPremise(on_premise)) = wire else {
            panic!("expected on premise connection");
        };
        assert_eq!(on_premise.hosts, vec!["h1".to_owned(), "h2".to_owned()]);
        assert_eq!(on_premise.port, 5432);
        assert_eq!(
            on_premise.tls_mode,
            Some(wire::TlsMode {
                mode: Some(tls_mode::Mode::Enabled(wire::TlsConfig {
                    ca_certificate: "PEM...".to_owned(),
                })),
            })
        );
    }

    #[test]
    fn test_missing_and_ambiguous_connection() {
        let path = AttrPath::root("postgres_source");
        let mut diags = Diagnostics::new();

        assert_eq!(host_connection_to_wire(None, &path, &mut diags), None);

        let empty = HostConnection::default();
        assert_eq!(host_connection_to_wire(Some(&empty), &path, &mut diags), None);

        let both = HostConnection {
            managed_cluster: Some(ManagedCluster {
                cluster_id: "c1".into(),
            }),
            ..self_hosted(&["h1"], 5432, None)
        };
        assert_eq!(host_connection_to_wire(Some(&both), &path, &mut diags), None);

        assert_eq!(
            diags.to_string(),
            "error: postgres_source: missing required block `connection`\n\
             error: postgres_source.connection: specify exactly one of: managed_cluster, self_hosted\n\
             error: postgres_source.connection: specify exactly one of: managed_cluster, self_hosted (found: managed_cluster, self_hosted)"
        );
    }

    #[test]
    fn test_empty_host_list_rejected() {
        let mut diags = Diagnostics::new();
        let flat = self_hosted(&[], 5432, None);
        host_connection_to_wire(Some(&flat), &AttrPath::root("pg"), &mut diags);
        let errors: Vec<_> = diags.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path.as_str(), "pg.connection.self_hosted.hosts");
    }

    #[test]
    fn test_tls_both_arms_rejected() {
        let mut diags = Diagnostics::new();
        let tls = TlsMode {
            disabled: Some(EmptyBlock {}),
            enabled: Some(TlsEnabled::default()),
        };
        assert_eq!(tls_to_wire(Some(&tls), &AttrPath::root("tls_mode"), &mut diags), None);
        assert!(diags.has_errors());
    }

    #[test]
    fn test_managed_cluster_read_back_has_no_hosts() {
        //given
        let wire = wire::HostConnection {
            connection: Some(host_connection::Connection::ClusterId("c1".to_owned())),
        };
        let prior = self_hosted(&["h1"], 5432, None);

        //when
        let flat = host_connection_from_wire(Some(&wire), Some(&prior));

        //then
        assert_eq!(
            flat,
            Some(HostConnection {
                managed_cluster: Some(ManagedCluster {
                    cluster_id: "c1".into()
                }),
                self_hosted: None,
            })
        );
    }

    #[test]
    fn test_absent_wire_tls_reads_disabled() {
        let wire = wire::OnPremise {
            hosts: vec!["h1".to_owned()],
            port: 5432,
            tls_mode: None,
        };
        let flat = self_hosted_from_wire(&wire, None);
        assert_eq!(flat.tls_mode, Some(TlsMode::disabled()));
    }

    #[test]
    fn test_self_hosted_round_trip() {
        let flat = self_hosted(&["h1", "h2"], 6432, Some(TlsMode::enabled("PEM".into())));
        let mut diags = Diagnostics::new();
        let wire = host_connection_to_wire(Some(&flat), &AttrPath::root("pg"), &mut diags);
        assert_eq!(host_connection_from_wire(wire.as_ref(), None), Some(flat));
    }

    #[test]
    fn test_mongo_srv_round_trip() {
        //given
        let flat = MongoConnection {
            dns_srv: Some(DnsSrv {
                hostname: "cluster0.example.net".into(),
            }),
            ..Default::default()
        };
        let mut diags = Diagnostics::new();

        //when
        let wire = mongo_connection_to_wire(Some(&flat), &AttrPath::root("mongo"), &mut diags);

        //then
        assert!(diags.is_empty());
        assert_eq!(
            wire.as_ref().and_then(|conn| conn.connection.clone()),
            Some(mongo_connection::Connection::Srv(mongo_wire::MongoSrv {
                hostname: "cluster0.example.net".to_owned(),
            }))
        );
        assert_eq!(mongo_connection_from_wire(wire.as_ref(), None), Some(flat));
    }

    #[test]
    fn test_mongo_three_arms_listed() {
        let mut diags = Diagnostics::new();
        mongo_connection_to_wire(
            Some(&MongoConnection::default()),
            &AttrPath::root("mongo_source"),
            &mut diags,
        );
        assert_eq!(
            diags.to_string(),
            "error: mongo_source.connection: specify exactly one of: managed_cluster, self_hosted, dns_srv"
        );
    }

    #[test]
    fn test_clickhouse_shards() {
        //given
        let flat = ClickhouseConnection {
            managed_cluster: None,
            self_hosted: Some(ClickhouseSelfHosted {
                shards: Field::Known(vec![
                    ClickhouseShard {
                        name: "s1".into(),
                        hosts: Field::Known(vec!["ch1".to_owned()]),
                    },
                    ClickhouseShard {
                        name: "s2".into(),
                        hosts: Field::Known(vec!["ch2".to_owned(), "ch3".to_owned()]),
                    },
                ]),
                http_port: Field::Known(8443),
                native_port: Field::Known(9440),
                tls_mode: Some(TlsMode::disabled()),
            }),
        };
        let mut diags = Diagnostics::new();

        //when
        let wire = clickhouse_connection_to_wire(Some(&flat), &AttrPath::root("ch"), &mut diags);

        //then
        assert!(diags.is_empty());
        let back = clickhouse_connection_from_wire(wire.as_ref(), None, &AttrPath::root("ch"), &mut diags);
        assert_eq!(back, Some(flat));
    }

    #[test]
    fn test_clickhouse_requires_shards() {
        let flat = ClickhouseConnection {
            managed_cluster: None,
            self_hosted: Some(ClickhouseSelfHosted::default()),
        };
        let mut diags = Diagnostics::new();
        clickhouse_connection_to_wire(Some(&flat), &AttrPath::root("ch"), &mut diags);
        assert_eq!(
            diags.to_string(),
            "error: ch.connection.self_hosted.shards: at least one shard is required"
        );
    }

    #[test]
    fn test_kafka_cluster_round_trip() {
        let flat = KafkaConnection {
            managed_cluster: Some(ManagedCluster {
                cluster_id: "kafka-1".into(),
            }),
            self_hosted: None,
        };
        let mut diags = Diagnostics::new();
        let wire = kafka_connection_to_wire(Some(&flat), &AttrPath::root("kafka"), &mut diags);
        assert!(diags.is_empty());
        assert_eq!(kafka_connection_from_wire(wire.as_ref(), None), Some(flat));
    }

    #[test]
    fn test_connection_not_echoed_keeps_prior() {
        let prior = self_hosted(&["h1"], 5432, None);
        assert_eq!(
            host_connection_from_wire(None, Some(&prior)),
            Some(prior.clone())
        );
        assert_eq!(
            host_connection_from_wire(Some(&wire::HostConnection::default()), Some(&prior)),
            Some(prior)
        );
    }
}
