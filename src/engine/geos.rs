use crate::algorithm::geos::{Interpolate, IsRing, IsSimple, Length, Project};
use crate::coord::CoordSequence;
use crate::engine::{EngineCoord, GeometryEngine};
use crate::error::Result;

/// An engine backed by the GEOS library.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeosEngine;

impl GeometryEngine for GeosEngine {
    fn length(&self, coords: &CoordSequence) -> Result<f64> {
        Length::length(coords)
    }

    fn project(&self, coords: &CoordSequence, x: f64, y: f64) -> Result<f64> {
        Project::project(coords, x, y)
    }

    fn interpolate(&self, coords: &CoordSequence, distance: f64) -> Result<EngineCoord> {
        Interpolate::interpolate(coords, distance)
    }

    fn is_ring(&self, coords: &CoordSequence) -> Result<bool> {
        IsRing::is_ring(coords)
    }

    fn is_simple(&self, coords: &CoordSequence) -> Result<bool> {
        IsSimple::is_simple(coords)
    }
}
