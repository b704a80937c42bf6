#![allow(dead_code)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod flight_control;
mod logger;
mod operator;
mod orchestrator;

use crate::flight_control::{MissionPoint, SimVehicle};
use crate::operator::ConsoleOperator;
use crate::orchestrator::FlightOrchestrator;
use std::{env, sync::Arc};

/// Default simulated home position (PX4 SITL launch point near Zurich).
const DEFAULT_HOME: (f64, f64) = (47.397_742, 8.545_594);

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let home = home_position();
    let vehicle = Arc::new(SimVehicle::new(home));
    let operator = Arc::new(ConsoleOperator::new());

    let orchestrator = FlightOrchestrator::new(vehicle, operator);
    match orchestrator.fly().await {
        Ok(()) => info!("Flight complete!"),
        Err(err) => {
            error!("Flight aborted: {err}!");
            std::process::exit(1);
        }
    }
}

/// Home position for the simulated vehicle, overridable as
/// `FLIGHTDECK_HOME="lat,lon"`.
fn home_position() -> MissionPoint {
    let fallback = MissionPoint::new(DEFAULT_HOME.0, DEFAULT_HOME.1);
    let Ok(raw) = env::var("FLIGHTDECK_HOME") else {
        return fallback;
    };
    let parsed = raw.split_once(',').and_then(|(lat, lon)| {
        let point = MissionPoint::new(lat.trim().parse().ok()?, lon.trim().parse().ok()?);
        point.is_valid().then_some(point)
    });
    parsed.unwrap_or_else(|| fatal!("Invalid FLIGHTDECK_HOME {raw:?}, expected \"lat,lon\""))
}
