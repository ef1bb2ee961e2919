//! Trivia questions.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions` | Paginated questions with the category map |
//! | POST | `/questions` | Create a question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | POST | `/search` | Case-insensitive search on question text |
//! | POST | `/questions/search` | Alias of `/search` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
