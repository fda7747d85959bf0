pub mod controller;
pub mod model;
pub mod router;
pub mod service;
pub mod status;

pub use model::*;
pub use router::init_tasks_router;
pub use status::Status;
