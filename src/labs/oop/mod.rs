pub mod abstract_classes;
pub mod constructors;
pub mod encapsulation;
pub mod inheritance;
pub mod multiple_inheritance;
pub mod polymorphism;
pub mod static_members;
