//! Request helpers shared by handlers.
//!
//! - [`hotel_id`] - Hotel identifier extraction from headers and paths

pub mod hotel_id;
