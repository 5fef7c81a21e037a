//! Data Transfer Objects (DTOs) for API requests and responses

pub mod checkout;
pub mod common;
pub mod contact;
pub mod purchase;
pub mod voice;

pub use checkout::*;
pub use common::*;
pub use contact::*;
pub use purchase::*;
pub use voice::*;
