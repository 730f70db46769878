pub mod money;
pub mod time_utils;
