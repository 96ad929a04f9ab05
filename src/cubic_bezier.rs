use num_traits::cast;

use super::point::Point;

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn ctrl1(&self) -> P {
        self.ctrl1
    }

    pub fn ctrl2(&self) -> P {
        self.ctrl2
    }

    pub fn end(&self) -> P {
        self.end
    }

    /// Control points in drawing order: start, ctrl1, ctrl2, end
    pub fn control_points(&self) -> [P; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Evaluate a CubicBezier curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: P::Scalar) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }

    /// Approximate the curve with `nsteps` straight lines; yields nsteps + 1 points
    /// from start to end. Backends that cannot stroke a cubic natively draw this polyline.
    pub fn flatten(&self, nsteps: usize) -> impl Iterator<Item = P> + '_ {
        let nsteps = nsteps.max(1);
        let count: Option<P::Scalar> = cast(nsteps);
        (0..=nsteps).map(move |i| {
            // hit the anchors exactly instead of relying on rounding at t = 1
            if i == 0 {
                self.start
            } else if i == nsteps {
                self.end
            } else {
                match (cast::<usize, P::Scalar>(i), count) {
                    (Some(i), Some(count)) => self.eval_casteljau(i / count),
                    // usize always converts to a float scalar
                    _ => self.end,
                }
            }
        })
    }
}
