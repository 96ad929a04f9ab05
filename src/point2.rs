use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::point::Point;

/// A point on the drawing surface in surface-local pixel coordinates
/// (origin top-left, y pointing down).
#[derive(Debug, Copy, Clone, Default)]
pub struct Point2<T> {
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T> Point2<T>
where
    T: Float,
{
    /// Creates a new Point2<T>. Any pair is accepted, including coordinates
    /// outside the visible surface.
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }
}

impl<T> PartialEq for Point2<T>
where
    T: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        (self.x == other.x) && (self.y == other.y)
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Point for Point2<T>
where
    T: Float + Default,
{
    type Scalar = T;
    const DIM: usize = 2;

    fn axis(&self, index: usize) -> Self::Scalar {
        match index {
            0 => self.x,
            1 => self.y,
            _ => T::nan(),
        }
    }

    fn squared_length(&self) -> Self::Scalar {
        self.x * self.x + self.y * self.y
    }
}
