pub mod origins;
pub mod tasks;
