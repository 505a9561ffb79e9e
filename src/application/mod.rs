// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - The boundary between the UI host and the services
// - Translates domain entities into DTOs
// - Maps errors into UI responses

pub mod dto;
pub mod error_handling;
pub mod state;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
