//! Quiz play.
//!
//! Stateless: the client resends every question it has already seen, and the
//! server draws the next one at random from what is left.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/quizzes` | Next random question for a quiz |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::QuizService;
