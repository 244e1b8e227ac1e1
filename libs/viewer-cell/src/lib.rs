pub mod handlers;
pub mod models;
pub mod router;

pub use models::ConnectionStatus;
pub use router::viewer_routes;
