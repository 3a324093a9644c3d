//! Build script for wristlet-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates watch.toml, generating the compiled-in defaults

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use wristlet_core::config::WatchConfig;

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse watch.toml and write `watch_config.rs` into OUT_DIR
fn generate_config() {
    println!("cargo:rerun-if-changed=watch.toml");

    let config_path = Path::new("watch.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read watch.toml", &[e.to_string()]),
    };

    let config: WatchConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail(
            "Invalid watch.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    if let Err(e) = config.validate() {
        fail("Invalid watch configuration", &[format!("{:?}", e)]);
    }

    let resources = installed_resources(&content);

    let build_timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let generated = format!(
        "/// Configuration compiled in from watch.toml\n\
         pub const WATCH_CONFIG: WatchConfig = WatchConfig {{\n\
         \x20   refresh_period_ms: {},\n\
         \x20   clock_type: ClockType::{:?},\n\
         \x20   watch_face: WatchFace::{:?},\n\
         \x20   battery_empty_mv: {},\n\
         \x20   battery_full_mv: {},\n\
         }};\n\n\
         /// Resource files flashed alongside the firmware\n\
         pub const INSTALLED_RESOURCES: &[&str] = &{:?};\n\n\
         /// Seconds since the epoch when the firmware was built\n\
         pub const BUILD_TIMESTAMP: u64 = {};\n",
        config.refresh_period_ms,
        config.clock_type,
        config.watch_face,
        config.battery_empty_mv,
        config.battery_full_mv,
        resources,
        build_timestamp,
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("watch_config.rs"), generated).unwrap();

    println!("cargo:warning=watch.toml validated successfully");
}

/// Read the optional `installed_resources` list
fn installed_resources(content: &str) -> Vec<String> {
    let value: toml::Value = match toml::from_str(content) {
        Ok(value) => value,
        Err(e) => fail("Invalid watch.toml", &[e.to_string()]),
    };

    let mut errors = Vec::new();
    let mut resources = Vec::new();
    match value.get("installed_resources") {
        None => {}
        Some(toml::Value::Array(entries)) => {
            for entry in entries {
                match entry.as_str() {
                    Some(path) if path.starts_with('/') => resources.push(path.to_string()),
                    Some(path) => errors.push(format!("resource path '{}' must be absolute", path)),
                    None => errors.push("installed_resources entries must be strings".to_string()),
                }
            }
        }
        Some(_) => errors.push("installed_resources must be an array".to_string()),
    }

    if !errors.is_empty() {
        fail("Invalid installed_resources", &errors);
    }
    resources
}

/// Abort the build with a boxed error report
fn fail(title: &str, details: &[String]) -> ! {
    let lines = details
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.clone()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, lines
    );
}
