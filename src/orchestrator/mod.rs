//! The flight orchestrator: one supervised flight from connect to
//! landing or mission start, as a single sequential async flow.


use crate::flight_control::{FlightError, FlightMode, Sensor, VehicleControl};
use crate::operator::OperatorInterface;
use std::sync::Arc;
use tokio::time::sleep;

/// Drives exactly one flight session end-to-end against its two
/// collaborators, taken at construction so tests can substitute fakes.
///
/// Every await is a strict barrier: the next command is never issued
/// before the previous one resolves, which is what guarantees the
/// safety-critical orderings (position check before arming, full
/// mission upload before arming, arming before mission start). Any
/// vehicle error aborts the remaining sequence and propagates to the
/// caller; there is no retry at this layer.
pub struct FlightOrchestrator {
    vehicle: Arc<dyn VehicleControl>,
    operator: Arc<dyn OperatorInterface>,
}

impl FlightOrchestrator {
    pub fn new(vehicle: Arc<dyn VehicleControl>, operator: Arc<dyn OperatorInterface>) -> Self {
        Self { vehicle, operator }
    }

    /// Conducts one operator-supervised flight: connect, validate the
    /// GPS position, calibrate on request, then run the selected
    /// flight mode.
    pub async fn fly(&self) -> Result<(), FlightError> {
        self.operator.try_connect();
        self.vehicle.connect().await?;
        self.operator.connected();

        self.operator.check_position();
        self.vehicle.check_position().await?;
        self.operator.valid_position();

        self.operator.display_drone(self.vehicle.as_ref()).await;

        if self.operator.get_calibrate() {
            self.run_calibration().await?;
        }

        match self.operator.get_flight_mode() {
            FlightMode::TakeoffAndLand => self.fly_takeoff_and_land().await,
            FlightMode::Mission => self.fly_mission().await,
        }
    }

    /// Calibrates all four sensors in the order the vehicle requires.
    /// All-or-nothing: the first failure aborts the rest of the
    /// sequence and the flight.
    async fn run_calibration(&self) -> Result<(), FlightError> {
        self.operator.calibrate();
        for sensor in Sensor::CALIBRATION_ORDER {
            match sensor {
                Sensor::Gyroscope => self.vehicle.calibrate_gyroscope().await?,
                Sensor::Accelerometer => self.vehicle.calibrate_accelerometer().await?,
                Sensor::Magnetometer => self.vehicle.calibrate_magnetometer().await?,
                Sensor::BoardLevel => self.vehicle.calibrate_board_level().await?,
            }
            self.operator.sensor_calibrated(sensor);
        }
        Ok(())
    }

    /// Arms, takes off, hovers for the operator-chosen delay and lands.
    /// The delay is a plain suspension with no abort path.
    async fn fly_takeoff_and_land(&self) -> Result<(), FlightError> {
        let delay = self.operator.get_delay();

        self.operator.arm();
        self.vehicle.arm().await?;

        self.operator.takeoff();
        self.vehicle.takeoff().await?;

        sleep(delay).await;

        self.operator.land();
        self.vehicle.land().await
    }

    /// Configures return-to-launch, builds the waypoint mission on the
    /// vehicle and flies it. The vehicle is only armed once the full
    /// mission plan is uploaded.
    async fn fly_mission(&self) -> Result<(), FlightError> {
        let return_to_launch = self.operator.return_to_launch();
        self.vehicle.return_to_launch(return_to_launch).await?;

        let points = self.operator.get_mission(self.vehicle.as_ref()).await;
        for point in points {
            self.vehicle.add_mission_point(point.latitude(), point.longitude());
        }

        let plan = self.vehicle.get_mission();
        self.vehicle.upload_mission(plan).await?;

        self.operator.arm();
        self.vehicle.arm().await?;

        self.vehicle.start_mission().await
    }
}
