//! Planar geometry exercises: segment intersection, convex hull and closest
//! pair of points.
//!
//! - [`segments_intersect`] / [`intersection_point`]: orientation tests with
//!   collinear on-segment special cases.
//! - [`convex_hull`]: Andrew's monotone chain, O(n log n).
//! - [`closest_pair`]: divide and conquer with a y-sorted strip, O(n log n).
//!
//! Coordinates are `f64`. Orientation treats cross products with magnitude
//! below [`EPSILON`] as collinear.

use std::cmp::Ordering;

/// Cross products smaller than this in magnitude count as zero.
pub const EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Closed segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Turn direction of the path `a -> b -> c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let val = (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y);
    if val.abs() < EPSILON {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Whether `b` lies in the bounding box of `a` and `c`.
///
/// Only meaningful once `a`, `b`, `c` are known to be collinear.
pub fn on_segment(a: Point, b: Point, c: Point) -> bool {
    a.x.min(c.x) <= b.x && b.x <= a.x.max(c.x) && a.y.min(c.y) <= b.y && b.y <= a.y.max(c.y)
}

/// Intersection of the infinite lines through `p1 p2` and `p3 p4`, or `None`
/// when they are (nearly) parallel.
pub fn line_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denom.abs() < EPSILON {
        return None;
    }
    let a = p1.x * p2.y - p1.y * p2.x;
    let b = p3.x * p4.y - p3.y * p4.x;
    Some(Point::new(
        (a * (p3.x - p4.x) - (p1.x - p2.x) * b) / denom,
        (a * (p3.y - p4.y) - (p1.y - p2.y) * b) / denom,
    ))
}

enum Contact {
    Crossing,
    Touching(Point),
    Disjoint,
}

fn contact(s: &Segment, t: &Segment) -> Contact {
    let (p1, q1, p2, q2) = (s.start, s.end, t.start, t.end);
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return Contact::Crossing;
    }
    let collinear = Orientation::Collinear;
    if o1 == collinear && on_segment(p1, p2, q1) {
        Contact::Touching(p2)
    } else if o2 == collinear && on_segment(p1, q2, q1) {
        Contact::Touching(q2)
    } else if o3 == collinear && on_segment(p2, p1, q2) {
        Contact::Touching(p1)
    } else if o4 == collinear && on_segment(p2, q1, q2) {
        Contact::Touching(q1)
    } else {
        Contact::Disjoint
    }
}

/// Whether the closed segments `s` and `t` share at least one point.
pub fn segments_intersect(s: &Segment, t: &Segment) -> bool {
    !matches!(contact(s, t), Contact::Disjoint)
}

/// A point shared by `s` and `t`.
///
/// For a proper crossing this is the line intersection; when an endpoint of
/// one segment lies on the other, that endpoint. `None` when the segments are
/// disjoint, or in the degenerate case where the orientations cross but the
/// lines are too close to parallel to solve.
///
/// ```
/// use dp_lab::problems::geometry::{intersection_point, Point, Segment};
///
/// let a = Segment::new(Point::new(0.0, 0.0), Point::new(3.0, 3.0));
/// let b = Segment::new(Point::new(0.0, 3.0), Point::new(3.0, 0.0));
/// assert_eq!(intersection_point(&a, &b), Some(Point::new(1.5, 1.5)));
/// ```
pub fn intersection_point(s: &Segment, t: &Segment) -> Option<Point> {
    match contact(s, t) {
        Contact::Crossing => line_intersection(s.start, s.end, t.start, t.end),
        Contact::Touching(p) => Some(p),
        Contact::Disjoint => None,
    }
}

fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

fn cmp_yx(a: &Point, b: &Point) -> Ordering {
    a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x))
}

/// Cross product of `o -> a` and `o -> b`; positive for a left turn.
fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Convex hull in counter-clockwise order, starting from the lowest-x
/// (then lowest-y) point.
///
/// Collinear boundary points and duplicates are dropped. Fewer than three
/// distinct points come back as-is (deduplicated, sorted).
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(cmp_xy);
    pts.dedup();
    if pts.len() <= 2 {
        return pts;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while let [.., o, a] = lower[..] {
            if cross(o, a, p) > 0.0 {
                break;
            }
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while let [.., o, a] = upper[..] {
            if cross(o, a, p) > 0.0 {
                break;
            }
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Closest pair of points and their distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPair {
    pub distance: f64,
    pub a: Point,
    pub b: Point,
}

impl ClosestPair {
    fn of(a: Point, b: Point) -> Self {
        Self {
            distance: a.distance(&b),
            a,
            b,
        }
    }
}

/// Closest pair among `points`, or `None` with fewer than two points.
///
/// ```
/// use dp_lab::problems::geometry::{closest_pair, Point};
///
/// let pts = [Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(1.0, 1.0)];
/// let best = closest_pair(&pts).unwrap();
/// assert!((best.distance - 2f64.sqrt()).abs() < 1e-12);
/// ```
pub fn closest_pair(points: &[Point]) -> Option<ClosestPair> {
    if points.len() < 2 {
        return None;
    }
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("closest_pair", n = points.len()).entered();

    let mut pts = points.to_vec();
    pts.sort_by(cmp_xy);
    let mut scratch = Vec::with_capacity(pts.len());
    Some(closest_in(&mut pts, &mut scratch))
}

/// `pts` arrives sorted by x and leaves sorted by y. Requires `pts.len() >= 2`.
fn closest_in(pts: &mut [Point], scratch: &mut Vec<Point>) -> ClosestPair {
    let n = pts.len();
    if n <= 3 {
        let mut best = ClosestPair::of(pts[0], pts[1]);
        for i in 0..n {
            for j in (i + 1)..n {
                let cand = ClosestPair::of(pts[i], pts[j]);
                if cand.distance < best.distance {
                    best = cand;
                }
            }
        }
        pts.sort_by(cmp_yx);
        return best;
    }

    let mid = n / 2;
    let mid_x = pts[mid].x;
    let (left, right) = pts.split_at_mut(mid);
    let from_left = closest_in(left, scratch);
    let from_right = closest_in(right, scratch);
    let mut best = if from_left.distance <= from_right.distance {
        from_left
    } else {
        from_right
    };

    // Merge the two y-sorted halves back into `pts`.
    scratch.clear();
    {
        let (mut i, mut j) = (0, mid);
        while i < mid && j < n {
            if cmp_yx(&pts[i], &pts[j]) != Ordering::Greater {
                scratch.push(pts[i]);
                i += 1;
            } else {
                scratch.push(pts[j]);
                j += 1;
            }
        }
        scratch.extend_from_slice(&pts[i..mid]);
        scratch.extend_from_slice(&pts[j..n]);
    }
    pts.copy_from_slice(scratch);

    // Only strip points within `best.distance` of the split line can improve.
    scratch.clear();
    scratch.extend(pts.iter().filter(|p| (p.x - mid_x).abs() < best.distance));
    for i in 0..scratch.len() {
        for j in (i + 1)..scratch.len() {
            if scratch[j].y - scratch[i].y >= best.distance {
                break;
            }
            let cand = ClosestPair::of(scratch[i], scratch[j]);
            if cand.distance < best.distance {
                best = cand;
            }
        }
    }
    best
}
