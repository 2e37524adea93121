//! The seam between the snapshot builder and the host platform.
//!
//! Every fact the builder aggregates comes in through [`HostFacts`], so
//! the live platform, a simulated environment, and test fixtures are all
//! interchangeable implementations of one trait.

use std::path::PathBuf;

use serde::Serialize;

/// A key in the application's manifest key-value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKey {
    /// Marketing version string (e.g. `"1.2.0"`).
    AppVersion,
    /// Build number string (e.g. `"42"`).
    BuildNumber,
    /// Application/bundle identifier (e.g. `"com.example.MyApp"`).
    BundleIdentifier,
}

/// Metrics of the active display surface, in device-independent units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayMetrics {
    /// Logical width in points.
    pub width: f64,
    /// Logical height in points.
    pub height: f64,
    /// Native pixel scale factor (e.g. `3.0` for a Super Retina panel).
    pub scale: f64,
    /// Whether the display belongs to a tablet-class device.
    pub is_tablet: bool,
}

/// Fact sources the snapshot builder queries, one call each, during capture.
///
/// All methods are synchronous and infallible: sources that can be absent
/// return `Option` and the builder applies a documented fallback, never an
/// error. Implementations should not block or perform network/disk I/O
/// beyond already-resident OS state.
pub trait HostFacts {
    /// Raw hardware model identifier from the platform's model query.
    fn hardware_identifier(&self) -> String;

    /// Operating system name (e.g. `"iOS"`).
    fn os_name(&self) -> String;

    /// Operating system version string (e.g. `"18.3.1"`).
    fn os_version(&self) -> String;

    /// Value for a manifest key, or `None` when the manifest lacks it.
    fn manifest_value(&self, key: ManifestKey) -> Option<String>;

    /// Whether the build targets a simulated execution environment.
    ///
    /// This reflects a compile-time build-target flag, not a runtime probe.
    fn is_simulator(&self) -> bool;

    /// Whether the build was compiled with the debug configuration.
    fn is_debug_build(&self) -> bool;

    /// Path the app-store receipt resource resolves to, if any.
    ///
    /// Only consulted by the beta-distribution heuristic.
    fn receipt_path(&self) -> Option<PathBuf>;

    /// OS-reported language preference list, most preferred first.
    fn preferred_languages(&self) -> Vec<String>;

    /// Current locale identifier (e.g. `"en_GB"`).
    fn locale_identifier(&self) -> String;

    /// Current timezone identifier (e.g. `"Europe/London"`).
    fn timezone_identifier(&self) -> String;

    /// Metrics of the active display surface.
    ///
    /// Capture must only run once a display context exists; this is a
    /// documented precondition, not a runtime-checked error.
    fn display_metrics(&self) -> DisplayMetrics;

    /// A process environment variable, if set.
    fn env_var(&self, name: &str) -> Option<String>;
}
