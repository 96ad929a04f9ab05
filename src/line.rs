use super::point::Point;

/// LineSegment defined by a start and an endpoint.
/// The editor uses it for the guide lines from an anchor to its handle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment<P> {
    pub(crate) start: P,
    pub(crate) end: P,
}

impl<P> LineSegment<P>
where
    P: Point,
{
    pub fn new(start: P, end: P) -> Self {
        LineSegment { start, end }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn end(&self) -> P {
        self.end
    }
}
