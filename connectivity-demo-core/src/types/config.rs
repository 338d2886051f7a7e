//! Demo panel configuration.
//!
//! Each panel is fully described by an immutable [`DemoConfig`]: the name it
//! resolves, the action it performs once resolved, and the diagram assets it
//! swaps between. A built-in default set covers the four standard demos;
//! deployments override it through a JSON config file.

use serde::{Deserialize, Serialize};

use crate::error::{DemoError, DemoResult};

/// Environment variable naming the JSON config file to load.
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

/// Where the resolved address lives in the `/resolv` response body.
///
/// The backend contract differs per deployment: some answer an `ips` array,
/// others a single `message` string. The panel config decides which field is
/// authoritative instead of assuming one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressSource {
    /// First entry of the `ips` array.
    #[default]
    Ips,
    /// The `message` string.
    Message,
}

/// Database credentials appended to the db-connect URL.
///
/// The backend expects them as `dbname`/`dbkey` query parameters. Carrying
/// credentials in a GET query string is part of its existing contract; see
/// [`DemoAction::target_url`] before reusing this elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbCredentials {
    pub db_name: String,
    pub db_key: String,
}

/// The action a panel performs after its target name resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DemoAction {
    /// Proxy an HTTP request to the resolved service.
    WebProxy {
        /// Path component of the proxied URL.
        service: String,
    },
    /// Open a database connection to the resolved host.
    DbConnect {
        /// URL scheme the backend's allow-list accepts
        /// (`postgres`, `mongodb` or `cosmos`).
        scheme: String,
        /// Database name in the URL path.
        database: String,
        /// Default credentials; frontends may override them at call time.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        credentials: Option<DbCredentials>,
    },
    /// Load a static document into the panel's embedded frame.
    FrameDump {
        /// Backend path of the document.
        path: String,
    },
}

impl DemoAction {
    /// Build the target URL passed to the action endpoint.
    ///
    /// `credentials` overrides the configured defaults when given. Note the
    /// db-connect variant embeds them as plain query parameters — that is
    /// the backend's contract, inherited as-is, and a known exposure risk.
    pub fn target_url(
        &self,
        fqdn: &str,
        credentials: Option<&DbCredentials>,
    ) -> DemoResult<String> {
        match self {
            Self::WebProxy { service } => Ok(format!("http://{fqdn}/{service}")),
            Self::DbConnect {
                scheme,
                database,
                credentials: configured,
            } => {
                let mut url = format!("{scheme}://{fqdn}/{database}");
                if let Some(creds) = credentials.or(configured.as_ref()) {
                    if creds.db_name.is_empty() || creds.db_key.is_empty() {
                        return Err(DemoError::ValidationError(
                            "database credentials require both name and key".to_string(),
                        ));
                    }
                    url.push_str(&format!(
                        "?dbname={}&dbkey={}",
                        urlencoding::encode(&creds.db_name),
                        urlencoding::encode(&creds.db_key)
                    ));
                }
                Ok(url)
            }
            Self::FrameDump { path } => Ok(path.clone()),
        }
    }
}

/// Static, per-panel configuration. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoConfig {
    /// Panel identifier (`demo1`..`demo4` in the default set).
    pub id: String,
    /// Panel title shown in the navigation.
    pub title: String,
    /// Idle description text.
    pub description: String,
    /// Name to resolve before acting. `None` skips the resolve stage
    /// (the frame-dump panel loads its document directly).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    /// Action performed after resolution.
    pub action: DemoAction,
    /// Which resolve-response field carries the address.
    #[serde(default)]
    pub address_source: AddressSource,
    /// Diagram asset shown while disconnected / failed.
    pub diagram_disconnected: String,
    /// Diagram asset shown after a successful check.
    pub diagram_connected: String,
}

impl DemoConfig {
    /// Reject configs that can never run: resolve-based actions need a name.
    pub fn validate(&self) -> DemoResult<()> {
        match self.action {
            DemoAction::FrameDump { .. } => Ok(()),
            DemoAction::WebProxy { .. } | DemoAction::DbConnect { .. } => {
                if self.fqdn.as_deref().unwrap_or("").is_empty() {
                    return Err(DemoError::ValidationError(format!(
                        "panel {} needs an fqdn for its action",
                        self.id
                    )));
                }
                Ok(())
            }
        }
    }
}

/// Top-level runner configuration: backend location plus the panel set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerConfig {
    /// Base URL of the demo backend.
    #[serde(default = "RunnerConfig::default_base_url")]
    pub base_url: String,
    /// Panels in display order.
    #[serde(default = "RunnerConfig::default_panels")]
    pub panels: Vec<DemoConfig>,
}

impl RunnerConfig {
    fn default_base_url() -> String {
        "http://127.0.0.1:8080".to_string()
    }

    /// The four standard demos.
    fn default_panels() -> Vec<DemoConfig> {
        vec![
            DemoConfig {
                id: "demo1".to_string(),
                title: "Service to Service".to_string(),
                description: "Resolve a remote service by name and proxy a request to it."
                    .to_string(),
                fqdn: Some("remoteservice.default".to_string()),
                action: DemoAction::WebProxy {
                    service: "demoservice".to_string(),
                },
                address_source: AddressSource::Ips,
                diagram_disconnected: "assets/img/service_disconnected_to_service.svg".to_string(),
                diagram_connected: "assets/img/service_to_service.svg".to_string(),
            },
            DemoConfig {
                id: "demo2".to_string(),
                title: "Service to Database".to_string(),
                description: "Resolve a database service and open a connection to it."
                    .to_string(),
                fqdn: Some("remotedb.default".to_string()),
                action: DemoAction::DbConnect {
                    scheme: "postgres".to_string(),
                    database: "appdb".to_string(),
                    credentials: None,
                },
                address_source: AddressSource::Ips,
                diagram_disconnected: "assets/img/service_disconnected_to_db.svg".to_string(),
                diagram_connected: "assets/img/service_to_db.svg".to_string(),
            },
            DemoConfig {
                id: "demo3".to_string(),
                title: "Service to Cloud".to_string(),
                description: "Resolve a cloud-hosted service and proxy a request across the VPN."
                    .to_string(),
                fqdn: Some("azureservice.default".to_string()),
                action: DemoAction::WebProxy {
                    service: "demoservice".to_string(),
                },
                address_source: AddressSource::Message,
                diagram_disconnected: "assets/img/service_disconnected_to_azure_cloud.svg"
                    .to_string(),
                diagram_connected: "assets/img/service_to_azure_cloud.svg".to_string(),
            },
            DemoConfig {
                id: "demo4".to_string(),
                title: "Request Dump".to_string(),
                description: "Load the backend's request dump document into the panel frame."
                    .to_string(),
                fqdn: None,
                action: DemoAction::FrameDump {
                    path: "/dump".to_string(),
                },
                address_source: AddressSource::Ips,
                diagram_disconnected: "assets/img/service_disconnected_to_service.svg".to_string(),
                diagram_connected: "assets/img/service_to_service.svg".to_string(),
            },
        ]
    }

    /// Validate every panel config.
    pub fn validate(&self) -> DemoResult<()> {
        for panel in &self.panels {
            panel.validate()?;
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            panels: Self::default_panels(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_four_valid_panels() {
        let config = RunnerConfig::default();
        assert_eq!(config.panels.len(), 4);
        config.validate().unwrap();
    }

    #[test]
    fn test_web_proxy_target_url() {
        let action = DemoAction::WebProxy {
            service: "demoservice".to_string(),
        };
        let url = action.target_url("remoteservice.default", None).unwrap();
        assert_eq!(url, "http://remoteservice.default/demoservice");
    }

    #[test]
    fn test_db_connect_url_without_credentials() {
        let action = DemoAction::DbConnect {
            scheme: "postgres".to_string(),
            database: "appdb".to_string(),
            credentials: None,
        };
        let url = action.target_url("remotedb.default", None).unwrap();
        assert_eq!(url, "postgres://remotedb.default/appdb");
    }

    #[test]
    fn test_db_connect_url_encodes_credentials() {
        let action = DemoAction::DbConnect {
            scheme: "cosmos".to_string(),
            database: "appdb".to_string(),
            credentials: None,
        };
        let creds = DbCredentials {
            db_name: "app db".to_string(),
            db_key: "k/e=y".to_string(),
        };
        let url = action.target_url("remotedb.default", Some(&creds)).unwrap();
        assert_eq!(
            url,
            "cosmos://remotedb.default/appdb?dbname=app%20db&dbkey=k%2Fe%3Dy"
        );
    }

    #[test]
    fn test_call_time_credentials_override_configured() {
        let action = DemoAction::DbConnect {
            scheme: "cosmos".to_string(),
            database: "appdb".to_string(),
            credentials: Some(DbCredentials {
                db_name: "configured".to_string(),
                db_key: "configured-key".to_string(),
            }),
        };
        let creds = DbCredentials {
            db_name: "typed".to_string(),
            db_key: "typed-key".to_string(),
        };
        let url = action.target_url("remotedb.default", Some(&creds)).unwrap();
        assert!(url.contains("dbname=typed"));
        assert!(!url.contains("configured"));
    }

    #[test]
    fn test_partial_credentials_rejected() {
        let action = DemoAction::DbConnect {
            scheme: "cosmos".to_string(),
            database: "appdb".to_string(),
            credentials: None,
        };
        let creds = DbCredentials {
            db_name: "appdb".to_string(),
            db_key: String::new(),
        };
        let err = action
            .target_url("remotedb.default", Some(&creds))
            .unwrap_err();
        assert!(matches!(err, DemoError::ValidationError(_)));
    }

    #[test]
    fn test_resolve_action_requires_fqdn() {
        let mut config = RunnerConfig::default().panels.remove(0);
        config.fqdn = None;
        assert!(matches!(
            config.validate(),
            Err(DemoError::ValidationError(_))
        ));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = RunnerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RunnerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.panels.len(), config.panels.len());
        assert_eq!(parsed.panels[1].action, config.panels[1].action);
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let parsed: RunnerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.base_url, "http://127.0.0.1:8080");
        assert_eq!(parsed.panels.len(), 4);
    }
}
