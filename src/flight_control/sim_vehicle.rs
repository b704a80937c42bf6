use super::flight_error::{FlightError, Sensor};
use super::mission::{MissionPlan, MissionPoint};
use super::vehicle_control::VehicleControl;
use crate::log;
use async_trait::async_trait;
use rand::{Rng, rng};
use std::sync::Mutex;
use std::time::Duration;
use strum_macros::Display;
use tokio::time::sleep;

/// Operational state of the simulated vehicle. Commands arriving in the
/// wrong state are rejected with the error of the rejected operation.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum VehicleState {
    Disconnected,
    Connected,
    Armed,
    Airborne,
}

#[derive(Debug)]
struct SimState {
    state: VehicleState,
    position: Option<MissionPoint>,
    mission: MissionPlan,
    uploaded: Option<Vec<u8>>,
    return_to_launch: bool,
}

/// In-process vehicle backend used when no real drone is attached.
///
/// Mimics command latency with short randomized sleeps and enforces the
/// same command ordering a real flight stack would: connect before
/// anything else, calibrate only on the ground, arm before takeoff,
/// upload before mission start.
#[derive(Debug)]
pub struct SimVehicle {
    home: MissionPoint,
    max_latency: Duration,
    sim: Mutex<SimState>,
}

impl SimVehicle {
    const DEFAULT_LATENCY: Duration = Duration::from_millis(250);

    pub fn new(home: MissionPoint) -> Self { Self::with_latency(home, Self::DEFAULT_LATENCY) }

    pub fn with_latency(home: MissionPoint, max_latency: Duration) -> Self {
        Self {
            home,
            max_latency,
            sim: Mutex::new(SimState {
                state: VehicleState::Disconnected,
                position: None,
                mission: MissionPlan::new(),
                uploaded: None,
                return_to_launch: false,
            }),
        }
    }

    pub fn state(&self) -> VehicleState { self.state_lock().state }

    pub fn is_return_to_launch(&self) -> bool { self.state_lock().return_to_launch }

    /// Decodes the mission plan as the vehicle link received it, if one
    /// has been uploaded.
    pub fn uploaded_mission(&self) -> Option<MissionPlan> {
        let sim = self.state_lock();
        let bytes = sim.uploaded.as_ref()?;
        bincode::serde::decode_from_slice(bytes, bincode::config::standard())
            .ok()
            .map(|(plan, _)| plan)
    }

    fn state_lock(&self) -> std::sync::MutexGuard<'_, SimState> {
        self.sim.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[allow(clippy::cast_possible_truncation)]
    async fn command_latency(&self) {
        let max_ms = self.max_latency.as_millis() as u64;
        if max_ms == 0 {
            return;
        }
        // The thread-local RNG is not Send, so sample before suspending.
        let ms = rng().random_range(max_ms / 2..=max_ms);
        sleep(Duration::from_millis(ms)).await;
    }

    async fn calibrate(&self, sensor: Sensor) -> Result<(), FlightError> {
        self.command_latency().await;
        let sim = self.state_lock();
        if sim.state != VehicleState::Connected {
            return Err(FlightError::Calibration(sensor));
        }
        log!("Simulated {sensor} calibration done");
        Ok(())
    }
}

#[async_trait]
impl VehicleControl for SimVehicle {
    async fn connect(&self) -> Result<(), FlightError> {
        self.command_latency().await;
        let mut sim = self.state_lock();
        if sim.state != VehicleState::Disconnected {
            return Err(FlightError::Connection);
        }
        sim.state = VehicleState::Connected;
        sim.position = Some(self.home);
        Ok(())
    }

    async fn check_position(&self) -> Result<(), FlightError> {
        self.command_latency().await;
        let sim = self.state_lock();
        match sim.position {
            Some(pos) if pos.is_valid() => Ok(()),
            _ => Err(FlightError::Position),
        }
    }

    async fn calibrate_gyroscope(&self) -> Result<(), FlightError> {
        self.calibrate(Sensor::Gyroscope).await
    }

    async fn calibrate_accelerometer(&self) -> Result<(), FlightError> {
        self.calibrate(Sensor::Accelerometer).await
    }

    async fn calibrate_magnetometer(&self) -> Result<(), FlightError> {
        self.calibrate(Sensor::Magnetometer).await
    }

    async fn calibrate_board_level(&self) -> Result<(), FlightError> {
        self.calibrate(Sensor::BoardLevel).await
    }

    async fn arm(&self) -> Result<(), FlightError> {
        self.command_latency().await;
        let mut sim = self.state_lock();
        if sim.state != VehicleState::Connected {
            return Err(FlightError::Arm);
        }
        sim.state = VehicleState::Armed;
        Ok(())
    }

    async fn takeoff(&self) -> Result<(), FlightError> {
        self.command_latency().await;
        let mut sim = self.state_lock();
        if sim.state != VehicleState::Armed {
            return Err(FlightError::Takeoff);
        }
        sim.state = VehicleState::Airborne;
        Ok(())
    }

    async fn land(&self) -> Result<(), FlightError> {
        self.command_latency().await;
        let mut sim = self.state_lock();
        if sim.state != VehicleState::Airborne {
            return Err(FlightError::Land);
        }
        // Motors disarm on touchdown.
        sim.state = VehicleState::Connected;
        sim.position = Some(self.home);
        Ok(())
    }

    async fn return_to_launch(&self, enabled: bool) -> Result<(), FlightError> {
        self.command_latency().await;
        let mut sim = self.state_lock();
        if sim.state == VehicleState::Disconnected {
            return Err(FlightError::ReturnToLaunch);
        }
        sim.return_to_launch = enabled;
        Ok(())
    }

    fn add_mission_point(&self, latitude: f64, longitude: f64) {
        self.state_lock().mission.add_point(MissionPoint::new(latitude, longitude));
    }

    fn get_mission(&self) -> MissionPlan { self.state_lock().mission.clone() }

    async fn upload_mission(&self, plan: MissionPlan) -> Result<(), FlightError> {
        self.command_latency().await;
        let encoded = bincode::serde::encode_to_vec(&plan, bincode::config::standard())
            .map_err(|_| FlightError::Upload)?;
        let mut sim = self.state_lock();
        if sim.state != VehicleState::Connected {
            return Err(FlightError::Upload);
        }
        sim.mission = plan;
        sim.uploaded = Some(encoded);
        Ok(())
    }

    async fn start_mission(&self) -> Result<(), FlightError> {
        self.command_latency().await;
        let mut sim = self.state_lock();
        if sim.state != VehicleState::Armed || sim.uploaded.is_none() {
            return Err(FlightError::MissionStart);
        }
        sim.state = VehicleState::Airborne;
        Ok(())
    }

    async fn position(&self) -> Option<MissionPoint> { self.state_lock().position }
}
