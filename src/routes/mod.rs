// Export all route modules
pub mod candidates;
pub mod resumes;

// Re-export all route handlers for easy importing
pub use candidates::*;
pub use resumes::*;
