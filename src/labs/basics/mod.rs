pub mod conditions;
pub mod functions;
pub mod loops;
pub mod operators;
