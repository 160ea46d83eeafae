pub mod api;
pub mod error;
pub mod handlers;
pub mod logging_middleware;
pub mod routes;

pub use api::run_rest_server;
pub use routes::create_router;
