use super::operator_interface::OperatorInterface;
use crate::flight_control::{FlightMode, MissionPoint, Sensor, VehicleControl};
use crate::{fatal, info, log, warn};
use async_trait::async_trait;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::time::Duration;

/// Terminal operator frontend: renders flight progress through the
/// logger macros and reads decisions from stdin, re-prompting until the
/// answer parses.
#[derive(Debug, Default)]
pub struct ConsoleOperator;

impl ConsoleOperator {
    /// Waypoints further than this many degrees from the vehicle get a
    /// confirmation prompt before being accepted.
    const FAR_WAYPOINT_DEG: f64 = 1.0;

    pub fn new() -> Self { Self }

    /// Reads one trimmed line; `None` means the input is closed (EOF or
    /// read error) and no further prompting can succeed.
    pub(crate) fn read_prompt_line(reader: &mut impl BufRead) -> Option<String> {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn prompt(text: &str) -> String {
        print!("{text} ");
        io::stdout().flush().ok();
        Self::read_prompt_line(&mut io::stdin().lock())
            .unwrap_or_else(|| fatal!("Operator input closed, aborting the flight"))
    }

    fn prompt_yes_no(text: &str) -> bool {
        loop {
            match Self::prompt(&format!("{text} [y/n]:")).to_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                other => warn!("Unrecognized answer {other:?}, expected y or n"),
            }
        }
    }

    /// `None` for anything `Duration` cannot represent: negative, NaN,
    /// infinite or overflowing second counts.
    pub(crate) fn parse_delay(answer: &str) -> Option<Duration> {
        let secs = answer.parse::<f64>().ok()?;
        Duration::try_from_secs_f64(secs).ok()
    }

    pub(crate) fn parse_point(line: &str) -> Option<MissionPoint> {
        let (lat, lon) = line.split_once(',')?;
        let point =
            MissionPoint::new(lat.trim().parse().ok()?, lon.trim().parse().ok()?);
        point.is_valid().then_some(point)
    }
}

#[async_trait]
impl OperatorInterface for ConsoleOperator {
    fn try_connect(&self) { info!("Connecting to the vehicle..."); }

    fn connected(&self) { info!("Vehicle connected!"); }

    fn check_position(&self) { info!("Checking the GPS position..."); }

    fn valid_position(&self) { info!("GPS position is valid!"); }

    fn calibrate(&self) { info!("Starting sensor calibration..."); }

    fn sensor_calibrated(&self, sensor: Sensor) { info!("Calibrated the {sensor}!"); }

    fn arm(&self) { info!("Arming the vehicle..."); }

    fn takeoff(&self) { info!("Taking off!"); }

    fn land(&self) { info!("Landing!"); }

    async fn display_drone(&self, vehicle: &dyn VehicleControl) {
        match vehicle.position().await {
            Some(pos) => log!("Vehicle position: {pos}"),
            None => warn!("Vehicle position unknown"),
        }
    }

    fn get_calibrate(&self) -> bool { Self::prompt_yes_no("Calibrate the sensors before flying?") }

    fn get_flight_mode(&self) -> FlightMode {
        loop {
            let answer = Self::prompt("Flight mode (takeoff/mission):").to_lowercase();
            match FlightMode::from_str(&answer) {
                Ok(mode) => return mode,
                Err(_) => warn!("Unrecognized flight mode {answer:?}"),
            }
        }
    }

    fn get_delay(&self) -> Duration {
        loop {
            let answer = Self::prompt("Seconds to hover before landing:");
            match Self::parse_delay(&answer) {
                Some(delay) => return delay,
                None => warn!("Expected a non-negative number of seconds, got {answer:?}"),
            }
        }
    }

    fn return_to_launch(&self) -> bool {
        Self::prompt_yes_no("Return to launch after the mission?")
    }

    async fn get_mission(&self, vehicle: &dyn VehicleControl) -> Vec<MissionPoint> {
        let current = vehicle.position().await;
        log!("Enter mission waypoints as \"lat, lon\", empty line to finish.");
        let mut points = Vec::new();
        loop {
            let line = Self::prompt(&format!("Waypoint {}:", points.len() + 1));
            if line.is_empty() {
                return points;
            }
            let Some(point) = Self::parse_point(&line) else {
                warn!("Expected \"lat, lon\" in degrees, got {line:?}");
                continue;
            };
            if let Some(pos) = current {
                let far = (point.latitude() - pos.latitude()).abs() > Self::FAR_WAYPOINT_DEG
                    || (point.longitude() - pos.longitude()).abs() > Self::FAR_WAYPOINT_DEG;
                if far && !Self::prompt_yes_no(&format!("{point} is far from {pos}, keep it?")) {
                    continue;
                }
            }
            points.push(point);
        }
    }
}
