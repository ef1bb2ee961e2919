/// Number of questions returned per page by every paginated endpoint
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Category id the quiz client sends for "All"
pub const ALL_CATEGORIES_ID: i32 = 0;

// =============================================================================
// SEED DATA
// =============================================================================

/// Categories a fresh store starts with, keyed by their canonical ids
pub const DEFAULT_CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];
