/// A position on the map in decimal degrees (WGS 84).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(&self) -> f64 {
        self.lat
    }

    pub const fn lng(&self) -> f64 {
        self.lng
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A single closed ring of `(lng, lat)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon(Vec<(f64, f64)>);

impl Polygon {
    /// A tiny polygon that stands in for a point.
    ///
    /// The ring starts and ends at `point` and spans `epsilon`
    /// degrees to the north and east.
    pub fn near_point(point: MapPoint, epsilon: f64) -> Self {
        let (lng, lat) = (point.lng(), point.lat());
        Self(vec![
            (lng, lat),
            (lng, lat + epsilon),
            (lng + epsilon, lat + epsilon),
            (lng, lat),
        ])
    }

    pub fn ring(&self) -> &[(f64, f64)] {
        &self.0
    }

    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => self.0.len() > 1 && first == last,
            _ => false,
        }
    }
}
