//! Round-up module - turns a raw gift into the amount actually charged.

mod roundup_calculator;
mod roundup_model;

pub use roundup_calculator::calculate_round_up;
pub use roundup_model::{RoundUpConfig, RoundUpOption, RoundUpResult};
