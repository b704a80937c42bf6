//! Operator-facing boundary: the prompt/display trait and the terminal
//! implementation of it.

mod console_operator;
mod operator_interface;
#[cfg(test)]
mod tests;

pub use console_operator::ConsoleOperator;
pub use operator_interface::OperatorInterface;
