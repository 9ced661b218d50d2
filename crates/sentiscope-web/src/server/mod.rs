pub mod app;
pub mod routes;

pub use app::*;
pub use routes::*;
