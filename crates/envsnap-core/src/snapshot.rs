//! Aggregated point-in-time environment snapshot.
//!
//! [`EnvironmentSnapshot::capture`] queries each [`HostFacts`] source once,
//! resolves the raw hardware identifier to a marketing name, computes the
//! runtime flags, and returns a frozen record. The record is plain data
//! with no context affinity: it can be read concurrently from any thread
//! and retained or discarded freely.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::host::{DisplayMetrics, HostFacts, ManifestKey};
use crate::model;

/// Environment variable a simulated environment uses to report the model
/// identifier of the hardware it emulates.
pub const SIMULATOR_MODEL_ENV: &str = "SIMULATOR_MODEL_IDENTIFIER";

/// Identifier used when a simulated environment does not report one.
const SIMULATOR_FALLBACK_ID: &str = "arm64";

/// Final path component that marks a beta-channel (sandbox) receipt.
const SANDBOX_RECEIPT_NAME: &str = "sandboxReceipt";

/// A snapshot of the device, app, and runtime environment at one instant.
///
/// Construct with [`EnvironmentSnapshot::capture`] on the context that owns
/// the active display surface. Once built, no field ever changes, so the
/// record can cross thread boundaries without synchronization. The flat
/// [`analytics_properties`](Self::analytics_properties) projection is the
/// transmission shape for analytics backends.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentSnapshot {
    // Identity
    /// Human-readable marketing name of the device (e.g. `"iPhone 16 Pro"`).
    pub model: String,
    /// Raw hardware model identifier (e.g. `"iPhone17,1"`).
    pub model_identifier: String,
    /// Operating system name (e.g. `"iOS"`).
    pub os_name: String,
    /// Operating system version string (e.g. `"18.3.1"`).
    pub os_version: String,

    // App
    /// Marketing version string; empty when absent from the manifest.
    pub app_version: String,
    /// Build number string; empty when absent from the manifest.
    pub build_number: String,
    /// Bundle/application identifier; empty when absent from the manifest.
    pub bundle_identifier: String,

    // Runtime
    /// Whether the build targets a simulated execution environment.
    pub is_simulator: bool,
    /// Whether the build was compiled with the debug configuration.
    pub is_debug_build: bool,
    /// Whether the app appears to be distributed through a beta channel.
    ///
    /// Best-effort receipt heuristic, never a security signal: false
    /// negatives are possible, and the value is always `false` under a
    /// simulated target where the detection mechanism is meaningless.
    pub is_testflight: bool,
    /// Preferred language identifier (e.g. `"en-GB"`).
    pub preferred_language: String,
    /// Timezone identifier (e.g. `"Europe/London"`).
    pub timezone: String,

    // Display
    /// Metrics of the display surface at capture time.
    pub display: DisplayMetrics,
}

impl EnvironmentSnapshot {
    /// Captures a fresh snapshot from the given host.
    ///
    /// Queries every fact source exactly once, synchronously, with no I/O
    /// beyond already-resident OS state. Must run on the context that owns
    /// the active display surface (display bounds and pixel scale are only
    /// queryable there); all other facts are context-independent. Never
    /// fails: every source has a defined fallback.
    pub fn capture(host: &impl HostFacts) -> Self {
        let is_simulator = host.is_simulator();

        // A simulated environment reports the host architecture as its
        // hardware model, so prefer the emulated identifier it exports.
        let model_identifier = if is_simulator {
            host.env_var(SIMULATOR_MODEL_ENV)
                .unwrap_or_else(|| SIMULATOR_FALLBACK_ID.to_string())
        } else {
            host.hardware_identifier()
        };
        let model = model::resolve(&model_identifier).to_string();

        let manifest = |key| host.manifest_value(key).unwrap_or_default();

        let preferred_language = host
            .preferred_languages()
            .into_iter()
            .next()
            .unwrap_or_else(|| host.locale_identifier());

        let snapshot = Self {
            model,
            model_identifier,
            os_name: host.os_name(),
            os_version: host.os_version(),
            app_version: manifest(ManifestKey::AppVersion),
            build_number: manifest(ManifestKey::BuildNumber),
            bundle_identifier: manifest(ManifestKey::BundleIdentifier),
            is_simulator,
            is_debug_build: host.is_debug_build(),
            is_testflight: detect_beta_distribution(is_simulator, host.receipt_path()),
            preferred_language,
            timezone: host.timezone_identifier(),
            display: host.display_metrics(),
        };
        debug!(
            model = %snapshot.model,
            os = %snapshot.os_name,
            version = %snapshot.os_version,
            "captured environment snapshot"
        );
        snapshot
    }

    /// A flat string-keyed projection for transmission to analytics and
    /// diagnostic backends.
    ///
    /// The key set is fixed and always fully populated — app metadata
    /// values may legitimately be empty when the manifest lacks them, but
    /// no key is ever omitted. Formatting is deterministic: booleans render
    /// as `"true"`/`"false"`, width and height as the integer part only,
    /// the pixel scale with exactly one decimal place, everything else
    /// verbatim. Key names and formatting are a stable contract for
    /// downstream consumers.
    pub fn analytics_properties(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("device_model", self.model.clone()),
            ("device_model_id", self.model_identifier.clone()),
            ("os_name", self.os_name.clone()),
            ("os_version", self.os_version.clone()),
            ("app_version", self.app_version.clone()),
            ("build_number", self.build_number.clone()),
            ("bundle_id", self.bundle_identifier.clone()),
            ("is_simulator", self.is_simulator.to_string()),
            ("is_debug", self.is_debug_build.to_string()),
            ("is_testflight", self.is_testflight.to_string()),
            ("language", self.preferred_language.clone()),
            ("timezone", self.timezone.clone()),
            ("screen_width", format!("{:.0}", self.display.width)),
            ("screen_height", format!("{:.0}", self.display.height)),
            ("screen_scale", format!("{:.1}", self.display.scale)),
            ("is_ipad", self.display.is_tablet.to_string()),
        ])
    }
}

/// Beta-channel detection: does the receipt resource resolve to a
/// sandbox-named file?
///
/// Explicitly non-cryptographic. Under a simulated target the receipt
/// mechanism does not exist, so the answer is unconditionally `false`
/// there; everywhere else an absent or oddly-named receipt collapses to
/// `false` rather than a distinct "unknown" state.
fn detect_beta_distribution(is_simulator: bool, receipt_path: Option<std::path::PathBuf>) -> bool {
    if is_simulator {
        return false;
    }
    receipt_path
        .and_then(|path| path.file_name().map(|name| name == SANDBOX_RECEIPT_NAME))
        .unwrap_or(false)
}
