use crate::flight_control::{FlightMode, MissionPoint, Sensor, VehicleControl};
use async_trait::async_trait;
use std::time::Duration;

/// Human-facing side of the flight: progress announcements and the few
/// decisions the orchestrator needs from the operator.
///
/// Notification calls return nothing and must not hold up the flight
/// beyond rendering; query calls block on operator input by design.
/// Neither kind calls back into the orchestrator.
#[async_trait]
pub trait OperatorInterface: Send + Sync {
    fn try_connect(&self);
    fn connected(&self);
    fn check_position(&self);
    fn valid_position(&self);
    fn calibrate(&self);
    fn sensor_calibrated(&self, sensor: Sensor);
    fn arm(&self);
    fn takeoff(&self);
    fn land(&self);

    /// Renders the current vehicle state. Presentation only, never a
    /// decision point.
    async fn display_drone(&self, vehicle: &dyn VehicleControl);

    fn get_calibrate(&self) -> bool;
    fn get_flight_mode(&self) -> FlightMode;
    fn get_delay(&self) -> Duration;
    fn return_to_launch(&self) -> bool;

    /// Collects the ordered mission waypoints. May consult the vehicle
    /// read-only, e.g. to sanity-check points against the current
    /// position.
    async fn get_mission(&self, vehicle: &dyn VehicleControl) -> Vec<MissionPoint>;
}
