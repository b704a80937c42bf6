use super::flight_error::FlightError;
use super::mission::{MissionPlan, MissionPoint};
use async_trait::async_trait;

/// Command and telemetry boundary to the physical or simulated drone.
///
/// All flight commands are asynchronous and may fail with the matching
/// [`FlightError`] kind. The trait is object safe so the orchestrator can
/// hold any backend behind `Arc<dyn VehicleControl>` and hand read-only
/// references to the operator layer.
///
/// Implementations are responsible for transport, retries and command
/// encoding; the orchestrator only relies on each operation being atomic
/// and truthful about completion.
#[async_trait]
pub trait VehicleControl: Send + Sync {
    async fn connect(&self) -> Result<(), FlightError>;

    /// Verifies the vehicle has a valid GPS lock. Nothing may be armed
    /// before this succeeds.
    async fn check_position(&self) -> Result<(), FlightError>;

    async fn calibrate_gyroscope(&self) -> Result<(), FlightError>;
    async fn calibrate_accelerometer(&self) -> Result<(), FlightError>;
    async fn calibrate_magnetometer(&self) -> Result<(), FlightError>;
    async fn calibrate_board_level(&self) -> Result<(), FlightError>;

    async fn arm(&self) -> Result<(), FlightError>;
    async fn takeoff(&self) -> Result<(), FlightError>;
    async fn land(&self) -> Result<(), FlightError>;

    /// Configures automatic return to the takeoff point after the
    /// mission. Configuration only, no immediate vehicle action.
    async fn return_to_launch(&self, enabled: bool) -> Result<(), FlightError>;

    /// Appends one waypoint to the vehicle-side mission buffer,
    /// preserving insertion order.
    fn add_mission_point(&self, latitude: f64, longitude: f64);

    /// Returns the accumulated mission plan for upload.
    fn get_mission(&self) -> MissionPlan;

    async fn upload_mission(&self, plan: MissionPlan) -> Result<(), FlightError>;
    async fn start_mission(&self) -> Result<(), FlightError>;

    /// Last known vehicle position, if any. Read-only telemetry for
    /// display and waypoint sanity checks.
    async fn position(&self) -> Option<MissionPoint>;
}
