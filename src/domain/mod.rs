// Domain layer: value types and calendar arithmetic. No I/O.

pub mod calendar;
pub mod model;
