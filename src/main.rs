//! cubelight - headless scene runner
//!
//! Loads configuration, binds a scene facade to a store, runs the configured
//! scene script (or the built-in demo) and reports the packed frame.

use std::error::Error;

use cubelight::config::AppConfig;
use cubelight::scene::demo_script;
use cubelight::systems::SceneSystem;
use cubelight_core::SceneScript;

fn main() -> Result<(), Box<dyn Error>> {
    // Logger level comes from config, so load first and report failures after init
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting cubelight");

    let script = match &config.scene.script {
        Some(path) => SceneScript::load(path)?,
        None => demo_script(),
    };

    let system = SceneSystem::from_config(&config);
    let summary = script.apply(system.scene())?;
    log::info!(
        "Applied script '{}': {} lights, {} cubes{}",
        script.name,
        summary.lights,
        summary.cubes,
        if system.is_deferred() { " (queued)" } else { "" }
    );

    let update = system.update()?;
    log::info!(
        "Frame packed: {} cube instances ({} bytes), {} light slots, dirty {:?}",
        update.data.instances.len(),
        update.data.instance_bytes().len(),
        update.data.lights.len(),
        update.dirty
    );
    if update.data.dropped_lights > 0 {
        log::warn!("{} lights did not fit into the light uniform", update.data.dropped_lights);
    }

    Ok(())
}
