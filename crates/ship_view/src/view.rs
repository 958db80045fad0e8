//! Selection-driven view state: report swap, toggle, drag, render frames.

use serde::{Deserialize, Serialize};
use ship_core::{Report, ReportBuilder, ResourceLibrary, Vessel};

use crate::WindowSettings;

/// Screen-space rectangle for the report panel.
///
/// Zero width/height asks the renderer to auto-size on the next draw; the
/// view zeroes the size on every selection change so the panel re-fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowRect {
    fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            width: 0,
            height: 0,
        }
    }
}

/// Host-supplied renderer for the report panel.
///
/// Draws a titled, draggable panel with `body` as preformatted text — no
/// word-wrap. Not called at all when there is nothing to show.
pub trait RenderSink {
    fn draw(&mut self, rect: WindowRect, title: &str, body: &str);
}

/// The tracking-station report window.
///
/// Owns the report builder, the current report snapshot, and the window
/// state. Reports are replaced wholesale on every selection change; the
/// renderer never sees a partial one.
pub struct TrackingView {
    builder: ReportBuilder,
    report: Option<Report>,
    rect: WindowRect,
    show: bool,
}

impl std::fmt::Debug for TrackingView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingView")
            .field("report", &self.report)
            .field("rect", &self.rect)
            .field("show", &self.show)
            .finish_non_exhaustive()
    }
}

impl TrackingView {
    pub fn new(settings: WindowSettings) -> Self {
        Self {
            builder: ReportBuilder::new(),
            report: None,
            rect: WindowRect::at(settings.window_x, settings.window_y),
            show: settings.show,
        }
    }

    /// Handles a tracking-station selection change.
    ///
    /// Rebuilds the report (or clears it for absent/unowned vessels) and
    /// zeroes the window size so the renderer re-fits the new text.
    pub fn selection_changed(&mut self, vessel: Option<&Vessel>, resources: &ResourceLibrary) {
        self.report = self.builder.build(vessel, resources);
        self.rect.width = 0;
        self.rect.height = 0;
        match &self.report {
            Some(report) => tracing::debug!(vessel = %report.title, "report rebuilt"),
            None => tracing::debug!("selection not owned, report cleared"),
        }
    }

    /// Flips window visibility. Report content is unaffected.
    pub fn toggle(&mut self) {
        self.show = !self.show;
        tracing::debug!(show = self.show, "view toggled");
    }

    /// The renderer reports the dragged window position back here.
    pub fn drag_to(&mut self, x: i32, y: i32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    /// The renderer reports the auto-sized panel dimensions back here.
    pub fn resized(&mut self, width: u32, height: u32) {
        self.rect.width = width;
        self.rect.height = height;
    }

    /// Draws the current report, if the window is shown and a report exists.
    pub fn render(&self, sink: &mut impl RenderSink) {
        if !self.show {
            return;
        }
        if let Some(report) = &self.report {
            sink.draw(self.rect, &report.title, &report.body());
        }
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn rect(&self) -> WindowRect {
        self.rect
    }

    /// Settings snapshot for the shutdown save.
    pub fn settings(&self) -> WindowSettings {
        WindowSettings {
            window_x: self.rect.x,
            window_y: self.rect.y,
            show: self.show,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ship_core::test_fixtures::{base_library, make_part, make_vessel};
    use ship_core::DiscoveryLevel;

    #[derive(Default)]
    struct RecordingSink {
        draws: Vec<(WindowRect, String, String)>,
    }

    impl RenderSink for RecordingSink {
        fn draw(&mut self, rect: WindowRect, title: &str, body: &str) {
            self.draws.push((rect, title.to_string(), body.to_string()));
        }
    }

    fn view() -> TrackingView {
        TrackingView::new(WindowSettings::default())
    }

    #[test]
    fn nothing_renders_before_a_selection() {
        let mut sink = RecordingSink::default();
        view().render(&mut sink);
        assert!(sink.draws.is_empty());
    }

    #[test]
    fn owned_selection_renders_titled_report() {
        let library = base_library();
        let mut view = view();
        let vessel = make_vessel(vec![make_part(1.0, &[("LiquidFuel", 10.0, 20.0)], &[])]);
        view.selection_changed(Some(&vessel), &library);

        let mut sink = RecordingSink::default();
        view.render(&mut sink);
        assert_eq!(sink.draws.len(), 1);
        let (_, title, body) = &sink.draws[0];
        assert_eq!(title, "Test Vessel");
        assert!(body.starts_with("LiquidFuel: 10.00 / 20.00"));
    }

    #[test]
    fn unowned_selection_clears_a_previous_report() {
        let library = base_library();
        let mut view = view();
        let vessel = make_vessel(vec![make_part(1.0, &[], &[])]);
        view.selection_changed(Some(&vessel), &library);
        assert!(view.report().is_some());

        let mut unowned = make_vessel(vec![]);
        unowned.discovery = DiscoveryLevel::Presence;
        view.selection_changed(Some(&unowned), &library);
        assert!(view.report().is_none());

        let mut sink = RecordingSink::default();
        view.render(&mut sink);
        assert!(sink.draws.is_empty());
    }

    #[test]
    fn hidden_window_renders_nothing_but_keeps_the_report() {
        let library = base_library();
        let mut view = view();
        let vessel = make_vessel(vec![make_part(1.0, &[], &[])]);
        view.selection_changed(Some(&vessel), &library);

        view.toggle();
        let mut sink = RecordingSink::default();
        view.render(&mut sink);
        assert!(sink.draws.is_empty());
        assert!(view.report().is_some());

        // Toggling back restores rendering without a rebuild.
        view.toggle();
        view.render(&mut sink);
        assert_eq!(sink.draws.len(), 1);
    }

    #[test]
    fn selection_change_zeroes_the_window_size() {
        let library = base_library();
        let mut view = view();
        view.resized(320, 200);
        assert_eq!(view.rect().width, 320);

        let vessel = make_vessel(vec![make_part(1.0, &[], &[])]);
        view.selection_changed(Some(&vessel), &library);
        assert_eq!(view.rect().width, 0);
        assert_eq!(view.rect().height, 0);
    }

    #[test]
    fn drag_and_toggle_feed_the_settings_snapshot() {
        let mut view = view();
        view.drag_to(17, 400);
        view.toggle();
        assert_eq!(
            view.settings(),
            WindowSettings {
                window_x: 17,
                window_y: 400,
                show: false,
            }
        );
    }
}
