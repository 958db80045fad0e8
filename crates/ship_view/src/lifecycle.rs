//! Startup/shutdown boundary.
//!
//! Content and settings are loaded exactly once at startup and the settings
//! are written exactly once at shutdown; the view owns nothing global.

use std::path::Path;

use anyhow::{Context, Result};
use ship_core::ResourceLibrary;

use crate::{TrackingView, WindowSettings};

/// Loads the resource table and persisted window settings.
///
/// A missing or malformed settings file silently yields defaults; a missing
/// or malformed content file is a hard error.
pub fn startup(resources_path: &Path, settings_path: &Path) -> Result<(TrackingView, ResourceLibrary)> {
    let resources = ship_content::load_resource_library(resources_path)
        .context("loading resource definitions")?;
    let settings = WindowSettings::load(settings_path);
    tracing::info!(
        resources = resources.len(),
        window_x = settings.window_x,
        window_y = settings.window_y,
        show = settings.show,
        "tracking view started"
    );
    Ok((TrackingView::new(settings), resources))
}

/// Persists the view's window settings.
pub fn shutdown(view: &TrackingView, settings_path: &Path) -> Result<()> {
    let settings = view.settings();
    settings.save(settings_path)?;
    tracing::info!("tracking view shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_resources(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("resources.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"resources": [{{"name": "LiquidFuel", "density": 0.005}}]}}"#
        )
        .unwrap();
        path
    }

    #[test]
    fn startup_without_settings_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let resources_path = write_resources(dir.path());
        let settings_path = dir.path().join("settings.json");

        let (view, resources) = startup(&resources_path, &settings_path).unwrap();
        assert_eq!(view.settings(), WindowSettings::default());
        assert_eq!(resources.len(), 1);
    }

    #[test]
    fn startup_without_content_file_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = startup(
            &dir.path().join("missing.json"),
            &dir.path().join("settings.json"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("loading resource definitions"));
    }

    #[test]
    fn settings_round_trip_through_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let resources_path = write_resources(dir.path());
        let settings_path = dir.path().join("settings.json");

        let (mut view, _resources) = startup(&resources_path, &settings_path).unwrap();
        view.drag_to(512, 64);
        view.toggle();
        shutdown(&view, &settings_path).unwrap();

        let (view, _resources) = startup(&resources_path, &settings_path).unwrap();
        assert_eq!(
            view.settings(),
            WindowSettings {
                window_x: 512,
                window_y: 64,
                show: false,
            }
        );
    }
}
