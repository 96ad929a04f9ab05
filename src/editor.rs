//! The editing session: owns the points and maps input events onto them.
//!
//! Re-rendering is explicit. After feeding an event to [`EditorSession::apply`]
//! the caller invokes [`EditorSession::render`], or uses [`EditorSession::handle`]
//! to do both in one step.

use core::str::FromStr;

use log::debug;

use super::config::EditorConfig;
use super::error::EditorError;
use super::point_store::PointStore;
use super::renderer::CurveRenderer;
use super::surface::Surface;
use super::{NativeFloat, Point2};

pub type EditorPoint = Point2<NativeFloat>;

/// The external triggers into the editor
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Click on the surface at a surface-local position
    Click(EditorPoint),
    RemoveLast,
    Reset,
}

impl InputEvent {
    pub fn click(x: NativeFloat, y: NativeFloat) -> Self {
        InputEvent::Click(Point2::new(x, y))
    }
}

/// Parses the textual form used by event scripts:
/// `click X Y`, `undo` (or `remove-last`) and `reset`.
impl FromStr for InputEvent {
    type Err = EditorError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = || EditorError::InvalidEvent(line.trim().to_string());
        let mut words = line.split_whitespace();

        let event = match words.next() {
            Some("click") => {
                let mut coord = || -> Result<NativeFloat, EditorError> {
                    words.next().and_then(|w| w.parse().ok()).ok_or_else(invalid)
                };
                let x = coord()?;
                let y = coord()?;
                InputEvent::click(x, y)
            }
            Some("undo") | Some("remove-last") => InputEvent::RemoveLast,
            Some("reset") => InputEvent::Reset,
            _ => return Err(invalid()),
        };

        if words.next().is_some() {
            return Err(invalid());
        }
        Ok(event)
    }
}

#[derive(Clone, Debug, Default)]
pub struct EditorSession {
    store: PointStore<EditorPoint>,
    config: EditorConfig,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        EditorSession {
            store: PointStore::new(),
            config,
        }
    }

    pub fn store(&self) -> &PointStore<EditorPoint> {
        &self.store
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// True if `point` lies on the configured canvas
    pub fn contains(&self, point: EditorPoint) -> bool {
        (0.0..=self.config.width as NativeFloat).contains(&point.x())
            && (0.0..=self.config.height as NativeFloat).contains(&point.y())
    }

    /// Apply `event` to the point store. Returns whether the points changed.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        let changed = match event {
            InputEvent::Click(point) => {
                if !self.contains(point) {
                    debug!("click at ({}, {}) is outside the canvas", point.x(), point.y());
                }
                self.store.append(point);
                true
            }
            InputEvent::RemoveLast => self.store.remove_last().is_some(),
            InputEvent::Reset => {
                let changed = !self.store.is_empty();
                self.store.clear();
                changed
            }
        };
        debug!("{:?} -> {} points", event, self.store.len());
        changed
    }

    /// Redraw the current points onto `surface`
    pub fn render<S>(&self, renderer: &CurveRenderer, surface: &mut S) -> Result<(), S::Error>
    where
        S: Surface<EditorPoint>,
    {
        renderer.render_store(&self.store, surface)
    }

    /// Apply `event`, then redraw. The redraw happens even if nothing changed.
    pub fn handle<S>(
        &mut self,
        event: InputEvent,
        renderer: &CurveRenderer,
        surface: &mut S,
    ) -> Result<bool, S::Error>
    where
        S: Surface<EditorPoint>,
    {
        let changed = self.apply(event);
        self.render(renderer, surface)?;
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawCall, RecordingSurface};

    #[test]
    fn parse_events() {
        assert_eq!("click 10 20.5".parse::<InputEvent>().unwrap(), InputEvent::click(10.0, 20.5));
        assert_eq!("  undo ".parse::<InputEvent>().unwrap(), InputEvent::RemoveLast);
        assert_eq!("remove-last".parse::<InputEvent>().unwrap(), InputEvent::RemoveLast);
        assert_eq!("reset".parse::<InputEvent>().unwrap(), InputEvent::Reset);

        for bad in ["", "click 1", "click x 2", "reset now", "drag 1 2"] {
            assert!(
                matches!(bad.parse::<InputEvent>(), Err(EditorError::InvalidEvent(_))),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn apply_reports_changes() {
        let mut session = EditorSession::default();
        assert!(!session.apply(InputEvent::RemoveLast));
        assert!(!session.apply(InputEvent::Reset));
        assert!(session.apply(InputEvent::click(5.0, 5.0)));
        assert!(session.apply(InputEvent::RemoveLast));
        assert!(session.store().is_empty());
    }

    #[test]
    fn clicks_outside_canvas_are_kept() {
        let mut session = EditorSession::new(EditorConfig {
            width: 100,
            height: 100,
            ..EditorConfig::default()
        });
        let outside = Point2::new(-10.0, 250.0);
        assert!(!session.contains(outside));
        session.apply(InputEvent::Click(outside));
        assert_eq!(session.store().snapshot(), &[outside]);
    }

    #[test]
    fn handle_redraws_even_without_change() {
        let mut session = EditorSession::default();
        let renderer = CurveRenderer::default();
        let mut surface = RecordingSurface::new();

        session.handle(InputEvent::click(1.0, 1.0), &renderer, &mut surface).unwrap();
        assert_eq!(surface.circles().count(), 1);

        session.handle(InputEvent::Reset, &renderer, &mut surface).unwrap();
        assert_eq!(surface.calls(), &[DrawCall::Clear]);

        let changed = session.handle(InputEvent::RemoveLast, &renderer, &mut surface).unwrap();
        assert!(!changed);
        assert_eq!(surface.calls(), &[DrawCall::Clear]);
    }
}
