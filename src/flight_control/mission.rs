use std::fmt;

/// One waypoint of a flight path, in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MissionPoint {
    latitude: f64,
    longitude: f64,
}

impl MissionPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self { Self { latitude, longitude } }

    pub fn latitude(&self) -> f64 { self.latitude }
    pub fn longitude(&self) -> f64 { self.longitude }

    /// Whether the coordinates are within the valid geographic range.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for MissionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// The ordered mission plan accumulated on the vehicle side. Order is
/// flight-path order; duplicate points are allowed. An empty plan is a
/// valid plan and gets uploaded as-is.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MissionPlan {
    points: Vec<MissionPoint>,
}

impl MissionPlan {
    pub fn new() -> Self { Self { points: Vec::new() } }

    pub fn add_point(&mut self, point: MissionPoint) { self.points.push(point); }

    pub fn points(&self) -> &[MissionPoint] { &self.points }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}
