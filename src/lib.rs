//! The core of a minimal interactive editor for composite cubic Bézier curves.
//!
//! Clicks append points to a [`PointStore`]. Every group of four consecutive
//! points taken at stride 3 (indices `0..=3`, `3..=6`, ...) forms one cubic
//! segment, which the [`CurveRenderer`] strokes together with its two guide
//! lines from the anchors to their handles. Every point gets a filled marker,
//! red for anchors (index divisible by 3) and blue for handles.
//!
//! Rendering is a full redraw onto a [`Surface`] and is invoked explicitly by
//! the caller after each mutation:
//!
//! ```rust
//! use bezier_sketch::{render, Point2, PointStore, RecordingSurface};
//!
//! let mut store = PointStore::new();
//! for (x, y) in [(10.0, 10.0), (20.0, 80.0), (80.0, 80.0), (90.0, 10.0)] {
//!     store.append(Point2::new(x, y));
//! }
//!
//! let mut surface = RecordingSurface::new();
//! render(&store, &mut surface).unwrap();
//! assert_eq!(surface.beziers().count(), 1);
//! assert_eq!(surface.lines().count(), 2);
//! assert_eq!(surface.circles().count(), 4);
//! ```

pub mod adapters;
pub mod config;
pub mod cubic_bezier;
pub mod editor;
pub mod error;
pub mod line;
pub mod point;
pub mod point2;
pub mod point_store;
pub mod renderer;
pub mod segment;
pub mod style;
pub mod surface;

/// Scalar type of editor points
pub type NativeFloat = f64;

pub use config::EditorConfig;
pub use cubic_bezier::CubicBezier;
pub use editor::{EditorPoint, EditorSession, InputEvent};
pub use error::EditorError;
pub use line::LineSegment;
pub use point::Point;
pub use point2::Point2;
pub use point_store::PointStore;
pub use renderer::{render, CurveRenderer};
pub use segment::{markers, segment_count, segments, CurveSegment, Marker, MarkerRole};
pub use style::{Color, RenderStyle};
pub use surface::{DrawCall, RecordingSurface, Surface};

/// Tolerance for float comparisons in geometry tests
pub const EPSILON: f64 = 0.0000001;
