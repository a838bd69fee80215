//! HTTP API module for the Leave Entitlement Engine.
//!
//! This module exposes the batch entitlement calculation as a JSON endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, EntitlementRequest, parse_calendar_date};
pub use response::{ApiError, ApiErrorResponse, EntitlementResponse};
pub use state::AppState;
