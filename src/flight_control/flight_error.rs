use strum_macros::Display;

/// Sensors the vehicle can calibrate, in the order the calibration
/// routine has to run them.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sensor {
    #[strum(to_string = "gyroscope")]
    Gyroscope,
    #[strum(to_string = "accelerometer")]
    Accelerometer,
    #[strum(to_string = "magnetometer")]
    Magnetometer,
    #[strum(to_string = "board level")]
    BoardLevel,
}

impl Sensor {
    /// Calibration order required by the vehicle: board level assumes
    /// gyroscope and accelerometer are already done.
    pub const CALIBRATION_ORDER: [Sensor; 4] =
        [Sensor::Gyroscope, Sensor::Accelerometer, Sensor::Magnetometer, Sensor::BoardLevel];
}

/// One error kind per vehicle operation category. The orchestrator never
/// recovers from any of these, it aborts the flight and hands the error
/// to its caller.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum FlightError {
    #[strum(to_string = "connection to the vehicle failed")]
    Connection,
    #[strum(to_string = "no valid GPS position")]
    Position,
    #[strum(to_string = "calibration of the {0} failed")]
    Calibration(Sensor),
    #[strum(to_string = "arming failed")]
    Arm,
    #[strum(to_string = "takeoff failed")]
    Takeoff,
    #[strum(to_string = "landing failed")]
    Land,
    #[strum(to_string = "mission upload failed")]
    Upload,
    #[strum(to_string = "mission start failed")]
    MissionStart,
    #[strum(to_string = "return-to-launch configuration failed")]
    ReturnToLaunch,
}

impl std::error::Error for FlightError {}
