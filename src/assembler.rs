//! Feature collection assembly.

use crate::models::{Feature, FeatureCollection, Geometry, PropertyMap};

/// Pair geometries with their properties into a `FeatureCollection`.
///
/// Pairs without a geometry are dropped; the survivors keep their input
/// order. A missing property map becomes an empty object.
pub fn assemble<I>(pairs: I) -> FeatureCollection
where
    I: IntoIterator<Item = (Option<Geometry>, Option<PropertyMap>)>,
{
    let features = pairs
        .into_iter()
        .filter_map(|(geometry, properties)| {
            geometry.map(|geometry| Feature {
                properties: properties.unwrap_or_default(),
                geometry,
            })
        })
        .collect();

    FeatureCollection { features }
}
