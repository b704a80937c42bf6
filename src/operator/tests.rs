use super::ConsoleOperator;
use crate::flight_control::MissionPoint;
use std::io::Cursor;
use std::time::Duration;

#[test]
fn delay_parsing_rejects_values_a_duration_cannot_hold() {
    assert_eq!(ConsoleOperator::parse_delay("5"), Some(Duration::from_secs(5)));
    assert_eq!(ConsoleOperator::parse_delay("0.5"), Some(Duration::from_millis(500)));
    assert_eq!(ConsoleOperator::parse_delay("0"), Some(Duration::ZERO));
    assert_eq!(ConsoleOperator::parse_delay("-1"), None);
    assert_eq!(ConsoleOperator::parse_delay("NaN"), None);
    assert_eq!(ConsoleOperator::parse_delay("inf"), None);
    // Parses as f64 but overflows Duration; must re-prompt, not panic.
    assert_eq!(ConsoleOperator::parse_delay("1e30"), None);
    assert_eq!(ConsoleOperator::parse_delay("soon"), None);
}

#[test]
fn waypoint_parsing_checks_shape_and_range() {
    assert_eq!(
        ConsoleOperator::parse_point("47.39, 8.54"),
        Some(MissionPoint::new(47.39, 8.54))
    );
    assert_eq!(ConsoleOperator::parse_point("47.39 8.54"), None);
    assert_eq!(ConsoleOperator::parse_point("91.0, 0.0"), None);
    assert_eq!(ConsoleOperator::parse_point("0.0, 181.0"), None);
    assert_eq!(ConsoleOperator::parse_point("north, east"), None);
}

#[test]
fn prompt_reading_distinguishes_lines_from_closed_input() {
    let mut input = Cursor::new("yes\n\n");
    assert_eq!(ConsoleOperator::read_prompt_line(&mut input), Some("yes".to_string()));
    // A blank line is still an answer.
    assert_eq!(ConsoleOperator::read_prompt_line(&mut input), Some(String::new()));
    // Exhausted input is terminal, not an endless re-prompt.
    assert_eq!(ConsoleOperator::read_prompt_line(&mut input), None);
}
