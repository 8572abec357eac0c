// Domain layer: lab catalog models and the Lab port. No I/O here beyond the console handle.

pub mod model;
pub mod ports;
