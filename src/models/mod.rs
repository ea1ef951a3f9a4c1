pub mod log_row;
pub mod order;
pub mod scorecard;
