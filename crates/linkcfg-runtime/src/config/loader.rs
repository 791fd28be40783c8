//! Configuration loader using figment.
//!
//! Builds the [`FigmentSource`] the binder reads from. Layers, lowest to
//! highest priority:
//!
//! 1. Defaults declared in the [`OptionRegistry`]
//! 2. The configuration file (`.toml` with `toml-config`, `.yaml`/`.yml`
//!    with `yaml-config`)
//! 3. Environment variables named by each option's alias, kept as raw text
//! 4. Programmatic overrides
//!
//! # Environment Variable Mapping
//!
//! Only registered aliases are read, and each maps onto its option name:
//!
//! - `LINK_SERVER_ADDR=:8443` → `server_addr = ":8443"`
//! - `LINK_MAX_CLIENT=200` → `max_client = 200`
//!
//! # Example
//!
//! ```rust,ignore
//! use linkcfg_runtime::config::ConfigLoader;
//!
//! let source = ConfigLoader::new(&registry)
//!     .file("./conf/server.toml")
//!     .set("log_level", "debug")
//!     .build()?;
//! ```

use std::collections::BTreeMap;
use std::env::{self, VarError};
use std::path::{Path, PathBuf};

use figment::Figment;
#[cfg(any(feature = "yaml-config", feature = "toml-config"))]
use figment::providers::Format;
#[cfg(feature = "toml-config")]
use figment::providers::Toml;
#[cfg(feature = "yaml-config")]
use figment::providers::Yaml;
use figment::providers::Serialized;
use figment::value::Value;
use linkcfg_core::{DefaultValue, OptionRegistry, OptionValue};
use tracing::{debug, info, trace, warn};

use super::source::FigmentSource;
use crate::error::{RuntimeError, RuntimeResult};

/// Option that names the primary configuration file.
pub const CONFIG_FILE_OPTION: &str = "conf";

/// Configuration loader with figment-based multi-source support.
pub struct ConfigLoader<'r> {
    /// Options known to the application.
    registry: &'r OptionRegistry,
    /// Configuration file to merge, if any.
    config_file: Option<PathBuf>,
    /// Whether to read environment aliases.
    load_env: bool,
    /// Values set in code, applied last.
    overrides: BTreeMap<String, OptionValue>,
}

impl<'r> ConfigLoader<'r> {
    /// Creates a loader with defaults and environment aliases enabled.
    pub fn new(registry: &'r OptionRegistry) -> Self {
        Self {
            registry,
            config_file: None,
            load_env: true,
            overrides: BTreeMap::new(),
        }
    }

    /// Sets the configuration file to load. The file must exist.
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Disables loading environment variables.
    pub fn without_env(mut self) -> Self {
        self.load_env = false;
        self
    }

    /// Overrides option `name` with `value`, above every other layer.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.overrides.insert(name.into(), value.into());
        self
    }

    /// Merges all layers into a [`FigmentSource`].
    ///
    /// Fails when the named file is missing, has an unsupported extension or
    /// does not parse.
    pub fn build(self) -> RuntimeResult<FigmentSource> {
        let defaults: BTreeMap<&str, OptionValue> = self.registry.defaults().collect();
        let mut figment = Figment::from(Serialized::defaults(defaults));

        if let Some(path) = &self.config_file {
            if !path.exists() {
                return Err(RuntimeError::FileNotFound(path.clone()));
            }
            info!(path = %path.display(), "Loading configuration file");
            figment = Self::merge_config_file(figment, path)?;
        }

        if self.load_env {
            trace!("Loading environment aliases");
            figment = figment.merge(Serialized::defaults(env_aliases(self.registry)));
        }

        if !self.overrides.is_empty() {
            debug!(count = self.overrides.len(), "Applying programmatic overrides");
            figment = figment.merge(Serialized::defaults(self.overrides));
        }

        // Surface parse errors now; lookups later are lenient and would hide them.
        figment.extract::<BTreeMap<String, Value>>()?;

        Ok(FigmentSource::new(figment))
    }

    /// Merges a single config file into the figment, dispatching on file extension.
    ///
    /// Only extensions enabled via feature flags are accepted.
    fn merge_config_file(figment: Figment, path: &Path) -> RuntimeResult<Figment> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            #[cfg(feature = "toml-config")]
            "toml" => Ok(figment.merge(Toml::file(path))),
            #[cfg(feature = "yaml-config")]
            "yaml" | "yml" => Ok(figment.merge(Yaml::file(path))),
            _ => Err(RuntimeError::UnsupportedFormat(ext.to_string())),
        }
    }
}

/// Reads the registered aliases from the environment, keyed by option name.
///
/// Values stay unparsed text so string options keep leading zeros and
/// brackets; typed lookups coerce int and bool options later.
fn env_aliases(registry: &OptionRegistry) -> BTreeMap<&'static str, String> {
    registry
        .iter()
        .filter_map(|d| {
            let alias = d.env_alias?;
            match env::var(alias) {
                Ok(value) => Some((d.name, value)),
                Err(VarError::NotPresent) => None,
                Err(VarError::NotUnicode(_)) => {
                    warn!(alias, "Ignoring non-UTF-8 environment variable");
                    None
                }
            }
        })
        .collect()
}

/// Returns the config file named by the environment alias of the
/// [`CONFIG_FILE_OPTION`] option, if that variable is set and non-empty.
pub fn config_file_from_env(registry: &OptionRegistry) -> Option<PathBuf> {
    let alias = registry.env_alias_for(CONFIG_FILE_OPTION)?;
    let path = env::var(alias).ok().filter(|p| !p.is_empty())?;
    debug!(alias, path = %path, "Config file set from environment");
    Some(PathBuf::from(path))
}

/// Finds the primary configuration file.
///
/// Reads the environment alias of the [`CONFIG_FILE_OPTION`] option first and
/// falls back to its declared default. Returns `None` when the registry has
/// no such option or neither yields a path.
pub fn locate_config_file(registry: &OptionRegistry) -> Option<PathBuf> {
    if let Some(path) = config_file_from_env(registry) {
        return Some(path);
    }

    match registry.descriptor_for(CONFIG_FILE_OPTION)?.default {
        DefaultValue::Str(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use linkcfg_core::{OptionDescriptor, Source};

    static OPTIONS: &[OptionDescriptor] = &[
        OptionDescriptor::string("conf", "./conf/server.toml", "config file").env("LINK_CONF"),
        OptionDescriptor::string("server_addr", ":443", "listen address").env("LINK_SERVER_ADDR"),
        OptionDescriptor::int("max_client", 100, "maximum clients").env("LINK_MAX_CLIENT"),
        OptionDescriptor::boolean("proxy_protocol", false, "proxy protocol")
            .env("LINK_PROXY_PROTOCOL"),
        OptionDescriptor::string("issuer", "Corp VPN", "issuer").env("LINK_ISSUER"),
        OptionDescriptor::string("jwt_secret", "", "token secret").env("LINK_JWT_SECRET"),
        OptionDescriptor::string("admin_pass", "", "admin password").env("LINK_ADMIN_PASS"),
    ];

    fn registry() -> OptionRegistry {
        OptionRegistry::new(OPTIONS).unwrap()
    }

    #[test]
    fn test_defaults_only() {
        let registry = registry();
        let source = ConfigLoader::new(&registry).without_env().build().unwrap();

        assert_eq!(source.get_string("server_addr"), ":443");
        assert_eq!(source.get_int("max_client"), 100);
        assert!(!source.get_bool("proxy_protocol"));
        assert_eq!(source.get_string("unknown"), "");
    }

    #[test]
    fn test_missing_file() {
        let registry = registry();
        let result = ConfigLoader::new(&registry)
            .file("/definitely/not/here/server.toml")
            .without_env()
            .build();
        assert!(matches!(result, Err(RuntimeError::FileNotFound(_))));
    }

    #[test]
    fn test_layer_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "server.toml",
                r#"
                server_addr = ":8443"
                max_client = 50
                proxy_protocol = true
                "#,
            )?;
            jail.set_env("LINK_MAX_CLIENT", "75");
            jail.set_env("PROXY_PROTOCOL", "false");

            let registry = registry();
            let source = ConfigLoader::new(&registry)
                .file("server.toml")
                .set("issuer", "Override VPN")
                .build()
                .map_err(|e| e.to_string())?;

            assert_eq!(source.get_string("server_addr"), ":8443");
            assert_eq!(source.get_int("max_client"), 75);
            // No alias registered, so the raw variable is ignored.
            assert!(source.get_bool("proxy_protocol"));
            assert_eq!(source.get_string("issuer"), "Override VPN");
            Ok(())
        });
    }

    #[test]
    fn test_env_alias_without_file() {
        Jail::expect_with(|jail| {
            jail.set_env("LINK_SERVER_ADDR", ":9443");

            let registry = registry();
            let source = ConfigLoader::new(&registry)
                .build()
                .map_err(|e| e.to_string())?;
            assert_eq!(source.get_string("server_addr"), ":9443");

            let source = ConfigLoader::new(&registry)
                .without_env()
                .build()
                .map_err(|e| e.to_string())?;
            assert_eq!(source.get_string("server_addr"), ":443");
            Ok(())
        });
    }

    #[test]
    fn test_env_strings_keep_raw_text() {
        Jail::expect_with(|jail| {
            jail.set_env("LINK_JWT_SECRET", "00000000000000000000123");
            jail.set_env("LINK_ISSUER", "007");
            jail.set_env("LINK_ADMIN_PASS", "[secret-pass]");
            jail.set_env("LINK_MAX_CLIENT", " 42 ");
            jail.set_env("LINK_PROXY_PROTOCOL", "T");

            let registry = registry();
            let source = ConfigLoader::new(&registry)
                .build()
                .map_err(|e| e.to_string())?;

            assert_eq!(source.get_string("jwt_secret"), "00000000000000000000123");
            assert_eq!(source.get_string("issuer"), "007");
            assert_eq!(source.get_string("admin_pass"), "[secret-pass]");
            assert_eq!(source.get_int("max_client"), 42);
            assert!(source.get_bool("proxy_protocol"));
            Ok(())
        });
    }

    #[test]
    fn test_env_strings_override_file_values() {
        Jail::expect_with(|jail| {
            jail.create_file("server.toml", "issuer = 42")?;
            jail.set_env("LINK_ISSUER", "0042");

            let registry = registry();
            let source = ConfigLoader::new(&registry)
                .file("server.toml")
                .build()
                .map_err(|e| e.to_string())?;
            assert_eq!(source.get_string("issuer"), "0042");
            Ok(())
        });
    }

    #[test]
    fn test_config_file_from_env() {
        Jail::expect_with(|jail| {
            let registry = registry();
            assert_eq!(config_file_from_env(&registry), None);

            jail.set_env("LINK_CONF", "");
            assert_eq!(config_file_from_env(&registry), None);

            jail.set_env("LINK_CONF", "./conf/server.toml");
            assert_eq!(
                config_file_from_env(&registry),
                Some(PathBuf::from("./conf/server.toml"))
            );
            Ok(())
        });
    }

    #[test]
    fn test_unsupported_extension() {
        Jail::expect_with(|jail| {
            jail.create_file("server.ini", "server_addr = :1")?;

            let registry = registry();
            let result = ConfigLoader::new(&registry)
                .file("server.ini")
                .without_env()
                .build();
            assert!(matches!(result, Err(RuntimeError::UnsupportedFormat(ext)) if ext == "ini"));
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_reported() {
        Jail::expect_with(|jail| {
            jail.create_file("server.toml", "server_addr = ")?;

            let registry = registry();
            let result = ConfigLoader::new(&registry)
                .file("server.toml")
                .without_env()
                .build();
            assert!(matches!(result, Err(RuntimeError::Source(_))));
            Ok(())
        });
    }

    #[test]
    fn test_locate_config_file() {
        Jail::expect_with(|jail| {
            let registry = registry();
            assert_eq!(
                locate_config_file(&registry),
                Some(PathBuf::from("./conf/server.toml"))
            );

            jail.set_env("LINK_CONF", "/etc/link/server.toml");
            assert_eq!(
                locate_config_file(&registry),
                Some(PathBuf::from("/etc/link/server.toml"))
            );
            Ok(())
        });
    }

    #[test]
    fn test_locate_without_conf_option() {
        static BARE: &[OptionDescriptor] = &[OptionDescriptor::int("max_client", 1, "")];
        let registry = OptionRegistry::new(BARE).unwrap();
        assert_eq!(locate_config_file(&registry), None);
    }
}
