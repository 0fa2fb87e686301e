//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `WISDOM_*` environment variables and an
//! optional configuration file, in that order of precedence.

use std::net::{IpAddr, SocketAddr};

use card_rules::{HiringTraitPolicy, PolicyParseError};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Errors raised when a configured value cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `bind_host` is not an IP address.
    #[error("invalid bind host: {value}")]
    InvalidBindHost { value: String },
    /// `hiring_trait_policy` names no known policy.
    #[error(transparent)]
    InvalidPolicy(#[from] PolicyParseError),
}

/// Runtime settings for the wisdom wall service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WISDOM")]
pub struct WisdomSettings {
    /// Interface to bind the HTTP listener to.
    pub bind_host: Option<String>,
    /// TCP port for the HTTP listener.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// PostgreSQL connection URL. Without it cards live in memory.
    pub database_url: Option<String>,
    /// `up-to-three-words` (default) or `single-word`.
    pub hiring_trait_policy: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

impl WisdomSettings {
    /// Socket address for the HTTP listener.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidBindHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST);
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::InvalidBindHost {
            value: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Hiring-trait policy applied to new cards.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidPolicy`] for unknown policy names.
    pub fn hiring_trait_policy(&self) -> Result<HiringTraitPolicy, SettingsError> {
        self.hiring_trait_policy
            .as_deref()
            .map_or(Ok(HiringTraitPolicy::default()), |raw| {
                raw.parse().map_err(SettingsError::from)
            })
    }

    /// Maximum pooled database connections.
    #[must_use]
    pub const fn pool_max_size(&self) -> u32 {
        self.pool_max_size
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration parsing.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    const VARS: [&str; 5] = [
        "WISDOM_BIND_HOST",
        "WISDOM_PORT",
        "WISDOM_DATABASE_URL",
        "WISDOM_HIRING_TRAIT_POLICY",
        "WISDOM_POOL_MAX_SIZE",
    ];

    fn load_from_empty_args() -> WisdomSettings {
        WisdomSettings::load_from_iter([OsString::from("wisdom-wall")])
            .expect("config should load")
    }

    fn env_with(overrides: &[(&str, &str)]) -> Vec<(&'static str, Option<String>)> {
        VARS.iter()
            .map(|name| {
                let value = overrides
                    .iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| (*value).to_owned());
                (*name, value)
            })
            .collect()
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(env_with(&[]));

        let settings = load_from_empty_args();

        assert_eq!(settings.port, 8080);
        assert!(settings.bind_host.is_none());
        assert_eq!(
            settings.bind_addr().expect("default bind address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("valid address")
        );
        assert!(settings.database_url().is_none());
        assert_eq!(
            settings.hiring_trait_policy().expect("default policy"),
            HiringTraitPolicy::UpToThreeWords
        );
        assert_eq!(settings.pool_max_size(), 10);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("WISDOM_BIND_HOST", Some("127.0.0.1".to_owned())),
            ("WISDOM_PORT", Some("9090".to_owned())),
            (
                "WISDOM_DATABASE_URL",
                Some("postgres://localhost/wall".to_owned()),
            ),
            ("WISDOM_HIRING_TRAIT_POLICY", Some("single-word".to_owned())),
            ("WISDOM_POOL_MAX_SIZE", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("bind address"),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("valid address")
        );
        assert_eq!(settings.database_url(), Some("postgres://localhost/wall"));
        assert_eq!(
            settings.hiring_trait_policy().expect("policy"),
            HiringTraitPolicy::SingleWord
        );
        assert_eq!(settings.pool_max_size(), 3);
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env(env_with(&[("WISDOM_DATABASE_URL", "   ")]));

        assert!(load_from_empty_args().database_url().is_none());
    }

    #[rstest]
    fn unknown_policy_is_reported() {
        let _guard = lock_env(env_with(&[("WISDOM_HIRING_TRAIT_POLICY", "haiku")]));

        let err = load_from_empty_args()
            .hiring_trait_policy()
            .expect_err("unknown policy");
        assert!(matches!(err, SettingsError::InvalidPolicy(_)));
    }

    #[rstest]
    fn port_alone_overrides_the_default_listener() {
        let _guard = lock_env(env_with(&[("WISDOM_PORT", "18080")]));

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("bind address"),
            "0.0.0.0:18080".parse::<SocketAddr>().expect("valid address")
        );
        assert_eq!(settings.pool_max_size(), 10);
    }

    #[rstest]
    fn hostnames_are_rejected_as_bind_hosts() {
        let _guard = lock_env(env_with(&[("WISDOM_BIND_HOST", "localhost")]));

        let err = load_from_empty_args().bind_addr().expect_err("not an ip");
        assert_eq!(
            err,
            SettingsError::InvalidBindHost {
                value: "localhost".to_owned()
            }
        );
    }
}
