//! Vehicle-side boundary of the flight: the control trait, the mission
//! data it accumulates, the error taxonomy and a simulated backend.

mod flight_error;
mod flight_mode;
mod mission;
mod sim_vehicle;
mod vehicle_control;
#[cfg(test)]
mod tests;

pub use flight_error::{FlightError, Sensor};
pub use flight_mode::FlightMode;
pub use mission::{MissionPlan, MissionPoint};
pub use sim_vehicle::{SimVehicle, VehicleState};
pub use vehicle_control::VehicleControl;
