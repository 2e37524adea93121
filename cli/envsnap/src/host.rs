//! Native host probe backing `envsnap capture`.

use std::env;
use std::path::PathBuf;

use envsnap_core::{DisplayMetrics, HostFacts, ManifestKey};

/// Environment variable that overrides the reported hardware identifier,
/// for checking resolver output against arbitrary identifiers.
const MODEL_OVERRIDE_ENV: &str = "ENVSNAP_MODEL_IDENTIFIER";

/// [`HostFacts`] implementation backed by the live host.
///
/// Display metrics come from the command line: a terminal process owns no
/// display surface, so the flags stand in for the display-context
/// collaborator a UI application would provide.
pub struct NativeHost {
    display: DisplayMetrics,
    os: os_info::Info,
}

impl NativeHost {
    pub fn new(display: DisplayMetrics) -> Self {
        Self {
            display,
            os: os_info::get(),
        }
    }
}

impl HostFacts for NativeHost {
    fn hardware_identifier(&self) -> String {
        env::var(MODEL_OVERRIDE_ENV).unwrap_or_else(|_| env::consts::ARCH.to_string())
    }

    fn os_name(&self) -> String {
        self.os.os_type().to_string()
    }

    fn os_version(&self) -> String {
        self.os.version().to_string()
    }

    fn manifest_value(&self, key: ManifestKey) -> Option<String> {
        // A CLI has no app manifest; the crate metadata plays that role.
        match key {
            ManifestKey::AppVersion => Some(env!("CARGO_PKG_VERSION").to_string()),
            ManifestKey::BuildNumber => option_env!("ENVSNAP_BUILD_NUMBER").map(str::to_string),
            ManifestKey::BundleIdentifier => Some(env!("CARGO_PKG_NAME").to_string()),
        }
    }

    fn is_simulator(&self) -> bool {
        false
    }

    fn is_debug_build(&self) -> bool {
        cfg!(debug_assertions)
    }

    fn receipt_path(&self) -> Option<PathBuf> {
        None
    }

    fn preferred_languages(&self) -> Vec<String> {
        sys_locale::get_locales().collect()
    }

    fn locale_identifier(&self) -> String {
        sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string())
    }

    fn timezone_identifier(&self) -> String {
        iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
    }

    fn display_metrics(&self) -> DisplayMetrics {
        self.display
    }

    fn env_var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}
