pub mod bot_routes;
pub mod history_routes;
pub mod ratings_routes;
pub mod realtime_routes;
pub mod ticker_routes;
