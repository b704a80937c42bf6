use strum_macros::{Display, EnumString};

/// The two supported flight profiles. Selected once per flight by the
/// operator; the orchestrator dispatches on it exactly once. The match
/// over this enum is exhaustive, so a new mode cannot silently fall
/// through without a vehicle action.
#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq)]
pub enum FlightMode {
    #[strum(to_string = "takeoff and land", serialize = "takeoff")]
    TakeoffAndLand,
    #[strum(to_string = "mission", serialize = "mission")]
    Mission,
}
