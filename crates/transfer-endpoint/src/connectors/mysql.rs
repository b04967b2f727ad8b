use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::common::CleanupPolicy;
use transfer_api::mysql as wire;

use crate::connection::{self, HostConnection};
use crate::diagnostics::{AttrPath, Diagnostics};
use crate::enums;
use crate::field::Field;
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

use super::ConnectorSettings;

object_transfer_settings!(
    MysqlObjectTransferSettings => wire::MysqlObjectTransferSettings {
        view,
        routine,
        trigger,
        tables,
    }
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MysqlSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<HostConnection>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub database: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub user: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub password: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub include_tables_regex: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub exclude_tables_regex: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub timezone: Field<String>,
    /// database for the service tables of the transfer
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub service_database: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_transfer_settings: Option<MysqlObjectTransferSettings>,
}

impl ConnectorSettings for MysqlSource {
    const NAME: &'static str = "mysql_source";

    type Wire = wire::MysqlSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::MysqlSource {
            connection: connection::host_connection_to_wire(self.connection.as_ref(), path, diags),
            database: scalar::to_wire(&self.database, &path.child("database"), diags),
            user: scalar::required_to_wire(&self.user, &path.child("user"), diags),
            password: secret::to_wire(&self.password, &path.child("password"), diags),
            include_tables_regex: scalar::to_wire(
                &self.include_tables_regex,
                &path.child("include_tables_regex"),
                diags,
            ),
            exclude_tables_regex: scalar::to_wire(
                &self.exclude_tables_regex,
                &path.child("exclude_tables_regex"),
                diags,
            ),
            timezone: scalar::to_wire(&self.timezone, &path.child("timezone"), diags),
            service_database: scalar::to_wire(
                &self.service_database,
                &path.child("service_database"),
                diags,
            ),
            object_transfer_settings: self.object_transfer_settings.as_ref().map(|settings| {
                settings.to_wire(&path.child("object_transfer_settings"), diags)
            }),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        Self {
            connection: connection::host_connection_from_wire(
                wire.connection.as_ref(),
                prior.and_then(|p| p.connection.as_ref()),
            ),
            database: scalar::from_wire(&wire.database, &prior_field(prior, |p| &p.database)),
            user: scalar::from_wire(&wire.user, &prior_field(prior, |p| &p.user)),
            password: secret::from_wire(wire.password.as_ref(), &prior_field(prior, |p| &p.password)),
            include_tables_regex: scalar::from_wire(
                &wire.include_tables_regex,
                &prior_field(prior, |p| &p.include_tables_regex),
            ),
            exclude_tables_regex: scalar::from_wire(
                &wire.exclude_tables_regex,
                &prior_field(prior, |p| &p.exclude_tables_regex),
            ),
            timezone: scalar::from_wire(&wire.timezone, &prior_field(prior, |p| &p.timezone)),
            service_database: scalar::from_wire(
                &wire.service_database,
                &prior_field(prior, |p| &p.service_database),
            ),
            object_transfer_settings: MysqlObjectTransferSettings::from_wire(
                wire.object_transfer_settings.as_ref(),
                prior.and_then(|p| p.object_transfer_settings.as_ref()),
                &path.child("object_transfer_settings"),
                diags,
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MysqlTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<HostConnection>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub database: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub user: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub password: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub sql_mode: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub skip_constraint_checks: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub timezone: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub cleanup_policy: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub service_database: Field<String>,
}

impl ConnectorSettings for MysqlTarget {
    const NAME: &'static str = "mysql_target";

    type Wire = wire::MysqlTarget;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::MysqlTarget {
            connection: connection::host_connection_to_wire(self.connection.as_ref(), path, diags),
            database: scalar::required_to_wire(&self.database, &path.child("database"), diags),
            user: scalar::required_to_wire(&self.user, &path.child("user"), diags),
            password: secret::to_wire(&self.password, &path.child("password"), diags),
            sql_mode: scalar::to_wire(&self.sql_mode, &path.child("sql_mode"), diags),
            skip_constraint_checks: scalar::to_wire(
                &self.skip_constraint_checks,
                &path.child("skip_constraint_checks"),
                diags,
            ),
            timezone: scalar::to_wire(&self.timezone, &path.child("timezone"), diags),
            cleanup_policy: enums::encode::<CleanupPolicy>(
                &self.cleanup_policy,
                &path.child("cleanup_policy"),
                diags,
            ),
            service_database: scalar::to_wire(
                &self.service_database,
                &path.child("service_database"),
                diags,
            ),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        Self {
            connection: connection::host_connection_from_wire(
                wire.connection.as_ref(),
                prior.and_then(|p| p.connection.as_ref()),
            ),
            database: scalar::from_wire(&wire.database, &prior_field(prior, |p| &p.database)),
            user: scalar::from_wire(&wire.user, &prior_field(prior, |p| &p.user)),
            password: secret::from_wire(wire.password.as_ref(), &prior_field(prior, |p| &p.password)),
            sql_mode: scalar::from_wire(&wire.sql_mode, &prior_field(prior, |p| &p.sql_mode)),
            skip_constraint_checks: scalar::from_wire(
                &wire.skip_constraint_checks,
                &prior_field(prior, |p| &p.skip_constraint_checks),
            ),
            timezone: scalar::from_wire(&wire.timezone, &prior_field(prior, |p| &p.timezone)),
            cleanup_policy: enums::decode::<CleanupPolicy>(
                wire.cleanup_policy,
                &path.child("cleanup_policy"),
                diags,
            ),
            service_database: scalar::from_wire(
                &wire.service_database,
                &prior_field(prior, |p| &p.service_database),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::connection::{SelfHosted, TlsMode};

    use super::*;

    fn connection() -> Option<HostConnection> {
        Some(HostConnection {
            managed_cluster: None,
            self_hosted: Some(SelfHosted {
                hosts: Field::Known(vec!["mysql.internal".to_owned()]),
                port: Field::Known(3306),
                tls_mode: Some(TlsMode::enabled(Field::Absent)),
            }),
        })
    }

    #[test]
    fn test_source_round_trip() {
        //given
        let flat = MysqlSource {
            connection: connection(),
            database: "shop".into(),
            user: "replicator".into(),
            password: "pw".into(),
            include_tables_regex: Field::Known(vec!["^orders_.*".to_owned()]),
            exclude_tables_regex: Field::Absent,
            timezone: "UTC".into(),
            service_database: Field::Absent,
            object_transfer_settings: Some(MysqlObjectTransferSettings {
                view: "AFTER_DATA".into(),
                routine: "NEVER".into(),
                ..Default::default()
            }),
        };
        let path = AttrPath::root(MysqlSource::NAME);
        let mut diags = Diagnostics::new();

        //when
        let wire = flat.to_wire(&path, &mut diags);
        let back = MysqlSource::from_wire(&wire, Some(&flat), &path, &mut diags);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(back, flat);
    }

    #[test]
    fn test_target_flags() {
        //given
        let flat = MysqlTarget {
            connection: connection(),
            database: "dwh".into(),
            user: "writer".into(),
            sql_mode: "NO_AUTO_VALUE_ON_ZERO".into(),
            skip_constraint_checks: Field::Known(false),
            cleanup_policy: "DROP".into(),
            ..Default::default()
        };
        let path = AttrPath::root(MysqlTarget::NAME);
        let mut diags = Diagnostics::new();

        //when
        let wire = flat.to_wire(&path, &mut diags);
        let back = MysqlTarget::from_wire(&wire, Some(&flat), &path, &mut diags);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert!(!wire.skip_constraint_checks);
        assert_eq!(back.skip_constraint_checks, Field::Known(false));
        assert_eq!(back, flat);
    }

    #[test]
    fn test_target_without_prior_reads_server_defaults() {
        let mut diags = Diagnostics::new();
        let wire = wire::MysqlTarget {
            database: "dwh".to_owned(),
            timezone: "Europe/Berlin".to_owned(),
            ..Default::default()
        };
        let flat = MysqlTarget::from_wire(&wire, None, &AttrPath::root("mysql_target"), &mut diags);
        assert_eq!(flat.timezone, Field::Known("Europe/Berlin".to_owned()));
        assert_eq!(flat.skip_constraint_checks, Field::Absent);
        assert_eq!(flat.connection, None);
        assert_eq!(flat.password, Field::Absent);
    }
}
