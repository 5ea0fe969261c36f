//! A kernel of one-dimensional geometries built from ordered coordinate sequences: line
//! strings, linear rings, and two-point lines.
//!
//! Geometries are created through a [`Factory`][factory::Factory], which carries the
//! dimensionality options and the [`GeometryEngine`][engine::GeometryEngine] that computes
//! lengths, projections, interpolations and ring tests.
//!
//! ```
//! use geolinear::factory::Factory;
//!
//! let factory = Factory::default();
//! let ring = factory.linear_ring(&[(0., 0.), (1., 0.), (1., 1.)]).unwrap();
//! assert_eq!(ring.num_points(), 4);
//! assert_eq!(ring.is_closed(), Some(true));
//! assert_eq!(ring.is_ring(), Some(true));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use factory::{Factory, FactoryOptions};
pub use scalar::{LinearGeometry, LinearKind, Point};

pub mod algorithm;
pub mod coord;
pub mod engine;
pub mod error;
pub mod factory;
pub mod geo_traits;
pub mod io;
pub mod scalar;
pub mod trait_;
