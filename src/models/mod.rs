pub mod rating;
pub mod realtime;
pub mod ticker;

pub use rating::{Ack, Rating};
pub use realtime::Realtime;
pub use ticker::Ticker;
