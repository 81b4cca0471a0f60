/// State management module
///
/// This module handles all application state, including:
/// - User-editable request inputs (input.rs)
/// - Story metadata returned by the service (story.rs)
/// - The three-way generation outcome consumed by the view (outcome.rs)

pub mod input;
pub mod outcome;
pub mod story;
