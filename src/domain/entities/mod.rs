//! Core domain entities.
//!
//! Entities are plain data structures without persistence concerns.
//!
//! # Entity Types
//!
//! - [`Hotel`] - A hotel listing
//! - [`User`] - A user account with a [`Role`]
//! - [`Actor`] - The identity behind an authenticated request
//!
//! Creation and partial updates use dedicated input types:
//! `NewHotel`, `HotelPatch`, `NewUser`.

pub mod hotel;
pub mod user;

pub use hotel::{Hotel, HotelPatch, NewHotel};
pub use user::{Actor, NewUser, Role, User};
