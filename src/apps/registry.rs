use std::collections::BTreeMap;
use std::sync::Arc;

use super::session::Help;
use super::wrappers::{HelpWrapper, UnsafeWrapper};
use super::{Application, builtins};
use crate::config::Config;
use crate::error::{Result, ShellError};

/// Registry of all programs, keyed by the name they are invoked by.
#[derive(Default)]
pub struct ApplicationRegistry {
    apps: BTreeMap<String, Arc<dyn Application>>,
}

impl ApplicationRegistry {
    /// A registry with nothing in it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the registry from configuration.
    ///
    /// Wrappers are composed here, in order: the help wrapper around every
    /// built-in (plus the `help` program), then an unsafe variant of every
    /// registered name under the configured prefix.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::empty();

        for app in builtins() {
            if config.applications.disabled.iter().any(|d| d == app.name()) {
                log::debug!("registry: {} disabled by config", app.name());
                continue;
            }
            registry.register(app);
        }

        if config.settings.help_wrappers {
            let names: Vec<String> = registry.names().map(str::to_string).collect();
            for app in registry.apps.values_mut() {
                let wrapped: Arc<dyn Application> = Arc::new(HelpWrapper::new(Arc::clone(app)));
                *app = wrapped;
            }
            registry.register(Arc::new(Help::new(names)));
        }

        if config.settings.unsafe_wrappers {
            let unsafe_variants: Vec<(String, Arc<dyn Application>)> = registry
                .apps
                .iter()
                .map(|(name, app)| {
                    let wrapped: Arc<dyn Application> =
                        Arc::new(UnsafeWrapper::new(Arc::clone(app)));
                    (format!("{}{name}", config.settings.unsafe_prefix), wrapped)
                })
                .collect();
            for (name, app) in unsafe_variants {
                registry.insert(name, app);
            }
        }

        log::debug!("registry: {} program(s)", registry.apps.len());
        registry
    }

    /// Register a program under its own name, replacing any previous entry.
    pub fn register(&mut self, app: Arc<dyn Application>) {
        self.apps.insert(app.name().to_string(), app);
    }

    /// Register a program under an explicit name.
    pub fn insert(&mut self, name: impl Into<String>, app: Arc<dyn Application>) {
        self.apps.insert(name.into(), app);
    }

    pub fn lookup(&self, name: &str) -> Result<&dyn Application> {
        self.apps
            .get(name)
            .map(|app| app.as_ref())
            .ok_or_else(|| ShellError::Application(format!("Unsupported application {name}")))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.apps.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.apps.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_overlay(toml_str: &str) -> ApplicationRegistry {
        let mut config = Config::default_config();
        config.apply_overlay_str(toml_str);
        ApplicationRegistry::from_config(&config)
    }

    #[test]
    fn default_registry_has_builtins() {
        let registry = ApplicationRegistry::from_config(&Config::default_config());
        for name in ["echo", "cat", "cd", "pwd", "ls", "grep", "help", "remove"] {
            assert!(registry.contains(name), "missing {name}");
        }
    }

    #[test]
    fn unsafe_variants_registered() {
        let registry = ApplicationRegistry::from_config(&Config::default_config());
        assert!(registry.contains("_cat"));
        assert!(registry.contains("_help"));
        assert!(!registry.contains("__cat"));
    }

    #[test]
    fn unknown_program() {
        let registry = ApplicationRegistry::from_config(&Config::default_config());
        let err = registry.lookup("nope").err().unwrap();
        assert!(matches!(err, ShellError::Application(_)));
        assert_eq!(err.to_string(), "Unsupported application nope");
    }

    #[test]
    fn wrappers_can_be_turned_off() {
        let registry = with_overlay(
            r#"
            [settings]
            help = false
            unsafe = false
        "#,
        );
        assert!(registry.contains("echo"));
        assert!(!registry.contains("help"));
        assert!(!registry.contains("_echo"));
    }

    #[test]
    fn custom_unsafe_prefix() {
        let registry = with_overlay(
            r#"
            [settings]
            unsafe_prefix = "try-"
        "#,
        );
        assert!(registry.contains("try-cat"));
        assert!(!registry.contains("_cat"));
    }

    #[test]
    fn disabled_programs_are_absent() {
        let registry = with_overlay(
            r#"
            [applications]
            disabled = ["remove", "rmdir"]
        "#,
        );
        assert!(!registry.contains("remove"));
        assert!(!registry.contains("_remove"));
        assert!(registry.contains("mkdir"));
    }

    #[test]
    fn names_are_sorted() {
        let registry = ApplicationRegistry::from_config(&Config::default_config());
        let names: Vec<&str> = registry.names().collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
