//! `envsnap capture` — snapshot the current environment.

use anyhow::Result;
use chrono::Local;

use envsnap_core::{DisplayMetrics, EnvironmentSnapshot};
use envsnap_format::FormatterCache;

use crate::host::NativeHost;

/// Capture a snapshot from the live host and print it.
pub fn run(json: bool, display: DisplayMetrics) -> Result<()> {
    let host = NativeHost::new(display);
    let snapshot = EnvironmentSnapshot::capture(&host);

    if json {
        let properties = snapshot.analytics_properties();
        println!("{}", serde_json::to_string_pretty(&properties)?);
        return Ok(());
    }

    let captured_at = FormatterCache::global()
        .cached("%d %b %Y %H:%M:%S", "POSIX")
        .format(&Local::now());

    println!("=== Environment Snapshot ===");
    println!("Captured: {captured_at}");
    println!();
    println!("--- Device ---");
    println!("  Model:     {}", snapshot.model);
    println!("  Model ID:  {}", snapshot.model_identifier);
    println!("  System:    {} {}", snapshot.os_name, snapshot.os_version);
    println!("  Tablet:    {}", yes_no(snapshot.display.is_tablet));
    println!(
        "  Screen:    {:.0} x {:.0} @{:.1}x",
        snapshot.display.width, snapshot.display.height, snapshot.display.scale
    );
    println!();
    println!("--- App ---");
    println!("  Version:   {}", snapshot.app_version);
    println!("  Build:     {}", snapshot.build_number);
    println!("  Bundle ID: {}", snapshot.bundle_identifier);
    println!();
    println!("--- Runtime ---");
    println!("  Simulator: {}", yes_no(snapshot.is_simulator));
    println!("  Debug:     {}", yes_no(snapshot.is_debug_build));
    println!("  Beta:      {}", yes_no(snapshot.is_testflight));
    println!("  Language:  {}", snapshot.preferred_language);
    println!("  Timezone:  {}", snapshot.timezone);

    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
