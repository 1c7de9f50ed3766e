use geo::{Centroid, Coord, Distance, Euclidean, Line, Point};
use rstar::primitives::Line as RTreeLine;

/// straight-line distance between two coordinates of a projected coordinate system.
pub fn euclidean_distance(a: &Coord<f64>, b: &Coord<f64>) -> f64 {
    Euclidean.distance(Point::from(*a), Point::from(*b))
}

/// the coordinate halfway along a straight segment.
pub fn midpoint(line: &Line<f64>) -> Coord<f64> {
    line.centroid().0
}

/// converts a segment into the primitive used for R-tree indexing.
///
/// # Arguments
///
/// * `line` - segment to convert
///
/// # Returns
///
/// * an rstar line whose envelope is the segment bounding box
pub fn as_rtree_line(line: &Line<f64>) -> RTreeLine<[f64; 2]> {
    RTreeLine::new(as_rtree_point(&line.start), as_rtree_point(&line.end))
}

pub fn as_rtree_point(coord: &Coord<f64>) -> [f64; 2] {
    [coord.x, coord.y]
}

pub fn from_rtree_line(line: &RTreeLine<[f64; 2]>) -> Line<f64> {
    let [x0, y0] = line.from;
    let [x1, y1] = line.to;
    Line::new(Coord { x: x0, y: y0 }, Coord { x: x1, y: y1 })
}

/// shortest distance from a coordinate to any location along a segment. degenerate
/// segments (loops) collapse to a point distance.
pub fn distance_to_segment(coord: &Coord<f64>, line: &Line<f64>) -> f64 {
    Euclidean.distance(&Point::from(*coord), line)
}
