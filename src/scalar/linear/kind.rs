use std::fmt;

/// The concrete variant of a [`LinearGeometry`][super::LinearGeometry].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinearKind {
    /// An open path of zero or more points.
    LineString,
    /// A closed path; first and last points coincide unless empty.
    LinearRing,
    /// A segment of exactly two points.
    Line,
}

impl LinearKind {
    pub fn name(&self) -> &'static str {
        match self {
            LinearKind::LineString => "LineString",
            LinearKind::LinearRing => "LinearRing",
            LinearKind::Line => "Line",
        }
    }
}

impl fmt::Display for LinearKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
