pub mod arrays;
pub mod bitwise;
pub mod file_handling;
pub mod pointers;
pub mod vectors;
