use geo::{Coord, LineString};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::{DualGraph, DualNode, Error, PrimalGraph};

impl DualGraph {
    /// Converts the streets to a `GeoJSON` `FeatureCollection`, one
    /// `LineString` per street following its segments upstream to downstream.
    ///
    /// `primal` must be the graph the streets were mapped from; it supplies
    /// the coordinates.
    pub fn to_geojson(&self, primal: &PrimalGraph) -> Result<FeatureCollection, Error> {
        let features = self
            .nodes()
            .iter()
            .map(|street| self.street_feature(primal, street))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self, primal: &PrimalGraph) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(primal)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    fn street_feature(&self, primal: &PrimalGraph, street: &DualNode) -> Result<Feature, Error> {
        let geometry = Geometry::new(GeoJsonValue::from(&street_geometry(primal, street)?));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "id": street.id,
                "length": street.length,
                "label": street.label,
                "names": street.names,
                "segments": street.segment_count(),
                "degree": self.degree(street.id),
            }
        });

        serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn street_geometry(primal: &PrimalGraph, street: &DualNode) -> Result<LineString<f64>, Error> {
    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(street.edges.len() + 1);

    if let Some((first, _)) = street.edges.first() {
        coords.push(primal.node(first)?.geometry.into());
    }
    for (_, next) in &street.edges {
        coords.push(primal.node(next)?.geometry.into());
    }

    Ok(LineString::new(coords))
}
