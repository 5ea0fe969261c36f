use crate::coord::CoordSequence;
use geo::line_intersection::{line_intersection, LineIntersection};
use itertools::Itertools;

/// Returns `true` if the line has no self-intersections other than at shared segment
/// endpoints, and at the start/end point of a closed line.
///
/// Consecutive repeated points are ignored.
pub trait IsSimple {
    fn is_simple(&self) -> bool;
}

impl IsSimple for CoordSequence {
    fn is_simple(&self) -> bool {
        let line_string: geo::LineString = self.into();
        let coords: Vec<geo::Coord> = line_string.0.into_iter().dedup().collect();
        if coords.len() < 3 {
            return true;
        }

        let closed = coords.first() == coords.last();
        let lines: Vec<geo::Line> = coords
            .iter()
            .tuple_windows()
            .map(|(start, end)| geo::Line::new(*start, *end))
            .collect();
        let last = lines.len() - 1;

        for (i, j) in (0..lines.len()).tuple_combinations() {
            let Some(intersection) = line_intersection(lines[i], lines[j]) else {
                continue;
            };
            match intersection {
                LineIntersection::SinglePoint { intersection, .. } => {
                    if j == i + 1 && intersection == lines[i].end {
                        continue;
                    }
                    if closed && i == 0 && j == last && intersection == lines[0].start {
                        continue;
                    }
                    return false;
                }
                LineIntersection::Collinear { .. } => return false,
            }
        }

        true
    }
}
