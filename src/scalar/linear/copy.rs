use crate::factory::Factory;
use crate::scalar::linear::{LinearGeometry, LinearKind};

/// Clone the coordinates of `source` into a new geometry of variant `kind`, owned by `factory`.
///
/// Returns `None` when `kind` is [`LinearKind::Line`] and `source` does not have exactly two
/// points, or when `kind` is [`LinearKind::LinearRing`] and `source` is not closed. Empty
/// sources are accepted as rings.
pub fn copy_into(
    kind: LinearKind,
    factory: &Factory,
    source: &LinearGeometry,
) -> Option<LinearGeometry> {
    if kind == LinearKind::Line && source.num_points() != 2 {
        tracing::debug!(
            num_points = source.num_points(),
            "cannot copy into Line: source does not have two points"
        );
        return None;
    }
    if kind == LinearKind::LinearRing && source.coord_sequence().is_closed() == Some(false) {
        tracing::debug!("cannot copy into LinearRing: source is not closed");
        return None;
    }

    Some(LinearGeometry::new_unchecked(
        kind,
        factory,
        source.coord_sequence().clone(),
    ))
}

impl LinearGeometry {
    /// Copy this geometry into another variant. See [`copy_into`].
    pub fn copy_as(&self, kind: LinearKind) -> Option<LinearGeometry> {
        copy_into(kind, self.factory(), self)
    }
}
