//! Startup pipeline: load, bind, resolve paths, validate, freeze.
//!
//! ```rust,ignore
//! use linkcfg_runtime::Bootstrap;
//!
//! let cfg = Bootstrap::<ServerConfig>::new(&registry)
//!     .validator(server::validator())
//!     .run_or_exit();
//! ```

use std::path::{Path, PathBuf};
use std::process;

use linkcfg_core::{
    Configurable, DefaultValue, Frozen, OptionRegistry, OptionValue, Validator, bind, path,
};
use tracing::{debug, error, info, warn};

use crate::config::{CONFIG_FILE_OPTION, ConfigLoader, config_file_from_env};
use crate::error::RuntimeResult;

/// Builder for the startup pipeline of a [`Configurable`] type.
pub struct Bootstrap<'r, T> {
    registry: &'r OptionRegistry,
    config_file: Option<PathBuf>,
    load_env: bool,
    overrides: Vec<(String, OptionValue)>,
    validator: Validator<T>,
}

impl<'r, T: Configurable> Bootstrap<'r, T> {
    /// Creates a pipeline with environment aliases enabled and no rules.
    pub fn new(registry: &'r OptionRegistry) -> Self {
        Self {
            registry,
            config_file: None,
            load_env: true,
            overrides: Vec::new(),
            validator: Validator::new(),
        }
    }

    /// Uses `path` as the primary config file. The file must exist.
    ///
    /// Without this, the file is located through the `conf` option.
    pub fn config_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Ignores environment variables, including the config file alias.
    pub fn without_env(mut self) -> Self {
        self.load_env = false;
        self
    }

    /// Overrides option `name` above every other source.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.overrides.push((name.into(), value.into()));
        self
    }

    /// Sets the rules checked after binding.
    pub fn validator(mut self, validator: Validator<T>) -> Self {
        self.validator = validator;
        self
    }

    /// Runs the pipeline and returns the frozen configuration.
    pub fn run(self) -> RuntimeResult<Frozen<T>> {
        let (config_file, required) = self.resolve_config_file();

        let mut loader = ConfigLoader::new(self.registry);
        if !self.load_env {
            loader = loader.without_env();
        }
        match &config_file {
            Some(file) if required || file.exists() => loader = loader.file(file),
            Some(file) => {
                warn!(path = %file.display(), "Default config file not found, using defaults");
            }
            None => debug!("No config file option registered"),
        }
        for (name, value) in self.overrides {
            loader = loader.set(name, value);
        }
        let source = loader.build()?;

        let mut config = T::default();
        let report = bind(&mut config, self.registry, &source);
        debug!(
            bound = report.bound,
            skipped = report.skipped,
            "Bound configuration"
        );

        let base = match &config_file {
            Some(file) => path::base_dir(file)?,
            None => std::env::current_dir()?,
        };
        let resolved = path::resolve_paths(&mut config, &base);
        debug!(base = %base.display(), resolved, "Resolved relative paths");

        self.validator.validate(&config)?;

        info!(config_file = ?config_file.as_deref(), "Configuration loaded");
        Ok(Frozen::new(config))
    }

    /// Runs the pipeline, terminating the process on any failure.
    pub fn run_or_exit(self) -> Frozen<T> {
        match self.run() {
            Ok(config) => config,
            Err(err) => exit_with(&err),
        }
    }

    /// Returns the config file to load and whether it must exist.
    ///
    /// An explicit path or one taken from the environment is required. The
    /// registry default is used only if present.
    fn resolve_config_file(&self) -> (Option<PathBuf>, bool) {
        if let Some(file) = &self.config_file {
            return (Some(file.clone()), true);
        }

        if self.load_env {
            if let Some(file) = config_file_from_env(self.registry) {
                return (Some(file), true);
            }
        }

        let default = self
            .registry
            .descriptor_for(CONFIG_FILE_OPTION)
            .and_then(|desc| match desc.default {
                DefaultValue::Str(path) if !path.is_empty() => Some(PathBuf::from(path)),
                _ => None,
            });
        (default, false)
    }
}

/// Logs `err`, prints it to stderr and exits with status 1.
pub fn exit_with(err: &dyn std::error::Error) -> ! {
    error!(error = %err, "Configuration failed");
    eprintln!("linkcfg: {err}");
    process::exit(1)
}

// =============================================================================
// Tests
// =============================================================================
