pub mod discord;
pub mod history_service;
pub mod ratings_service;
pub mod realtime_service;
pub mod refresher;
pub mod schedule;
pub mod yahoo;
