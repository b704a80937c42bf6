use super::{FlightError, FlightMode, MissionPoint, Sensor, SimVehicle, VehicleControl, VehicleState};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

fn vehicle() -> SimVehicle {
    SimVehicle::with_latency(MissionPoint::new(47.397_742, 8.545_594), Duration::ZERO)
}

#[tokio::test]
async fn sim_vehicle_walks_through_a_takeoff_and_land() {
    let sim = vehicle();
    assert_eq!(sim.state(), VehicleState::Disconnected);

    sim.connect().await.unwrap();
    sim.check_position().await.unwrap();
    assert_eq!(sim.state(), VehicleState::Connected);

    sim.arm().await.unwrap();
    assert_eq!(sim.state(), VehicleState::Armed);
    sim.takeoff().await.unwrap();
    assert_eq!(sim.state(), VehicleState::Airborne);
    sim.land().await.unwrap();
    assert_eq!(sim.state(), VehicleState::Connected);
}

#[tokio::test]
async fn sim_vehicle_commands_run_on_a_spawned_task() {
    // Commands suspend mid-operation for the latency sleep, so their
    // futures have to stay Send to run under the multi-threaded runtime.
    let sim = Arc::new(SimVehicle::with_latency(
        MissionPoint::new(47.397_742, 8.545_594),
        Duration::from_millis(2),
    ));
    let task = tokio::spawn({
        let sim = Arc::clone(&sim);
        async move { sim.connect().await }
    });
    task.await.unwrap().unwrap();
    assert_eq!(sim.state(), VehicleState::Connected);
}

#[tokio::test]
async fn sim_vehicle_rejects_commands_out_of_order() {
    let sim = vehicle();
    assert_eq!(sim.arm().await, Err(FlightError::Arm));
    assert_eq!(sim.takeoff().await, Err(FlightError::Takeoff));
    assert_eq!(sim.check_position().await, Err(FlightError::Position));

    sim.connect().await.unwrap();
    assert_eq!(sim.takeoff().await, Err(FlightError::Takeoff));
    assert_eq!(sim.land().await, Err(FlightError::Land));
    assert_eq!(sim.connect().await, Err(FlightError::Connection));
}

#[tokio::test]
async fn sim_vehicle_rejects_calibration_while_armed() {
    let sim = vehicle();
    sim.connect().await.unwrap();
    sim.calibrate_gyroscope().await.unwrap();

    sim.arm().await.unwrap();
    assert_eq!(
        sim.calibrate_magnetometer().await,
        Err(FlightError::Calibration(Sensor::Magnetometer))
    );
}

#[tokio::test]
async fn sim_vehicle_requires_an_upload_before_mission_start() {
    let sim = vehicle();
    sim.connect().await.unwrap();
    sim.arm().await.unwrap();
    assert_eq!(sim.start_mission().await, Err(FlightError::MissionStart));
}

#[tokio::test]
async fn sim_vehicle_flies_an_uploaded_mission() {
    let sim = vehicle();
    sim.connect().await.unwrap();
    sim.return_to_launch(true).await.unwrap();
    assert!(sim.is_return_to_launch());

    sim.add_mission_point(1.0, 2.0);
    sim.add_mission_point(1.0, 2.0);
    sim.add_mission_point(3.0, 4.0);
    let plan = sim.get_mission();
    assert_eq!(
        plan.points(),
        &[
            MissionPoint::new(1.0, 2.0),
            MissionPoint::new(1.0, 2.0),
            MissionPoint::new(3.0, 4.0),
        ]
    );

    sim.upload_mission(plan).await.unwrap();
    sim.arm().await.unwrap();
    sim.start_mission().await.unwrap();
    assert_eq!(sim.state(), VehicleState::Airborne);
}

#[tokio::test]
async fn uploaded_mission_survives_the_wire_encoding() {
    let sim = vehicle();
    sim.connect().await.unwrap();
    sim.add_mission_point(1.0, 2.0);
    sim.add_mission_point(1.0, 2.0);
    sim.add_mission_point(-3.5, 4.25);
    let plan = sim.get_mission();

    sim.upload_mission(plan.clone()).await.unwrap();
    assert_eq!(sim.uploaded_mission(), Some(plan));
}

#[tokio::test]
async fn sim_vehicle_rejects_upload_while_airborne() {
    let sim = vehicle();
    sim.connect().await.unwrap();
    sim.arm().await.unwrap();
    sim.takeoff().await.unwrap();
    assert_eq!(sim.upload_mission(sim.get_mission()).await, Err(FlightError::Upload));
}

#[test]
fn mission_point_validates_coordinate_ranges() {
    assert!(MissionPoint::new(90.0, -180.0).is_valid());
    assert!(!MissionPoint::new(90.5, 0.0).is_valid());
    assert!(!MissionPoint::new(0.0, 180.5).is_valid());
}

#[test]
fn flight_mode_parses_operator_answers() {
    assert_eq!(FlightMode::from_str("takeoff"), Ok(FlightMode::TakeoffAndLand));
    assert_eq!(FlightMode::from_str("mission"), Ok(FlightMode::Mission));
    assert!(FlightMode::from_str("hover").is_err());
}

#[test]
fn calibration_errors_name_the_sensor() {
    let err = FlightError::Calibration(Sensor::BoardLevel);
    assert_eq!(err.to_string(), "calibration of the board level failed");
}
