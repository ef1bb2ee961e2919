//! Trivia categories.
//!
//! Categories are seeded by migrations and read-only through the API.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | Category map and count |
//! | GET | `/categories/{id}/questions` | Paginated questions of one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
