pub mod irregularity;
pub mod punch;
pub mod punch_kind;
pub mod roster;
pub mod schedule;
