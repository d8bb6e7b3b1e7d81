// Layout
pub mod card;
pub mod stat_card;

// Status indicators
pub mod badge;
pub mod progress;
pub mod signal;

// Feedback
pub mod confirm;
pub mod flash;

// Re-exports for convenience
pub use badge::*;
pub use card::*;
pub use confirm::*;
pub use flash::*;
pub use progress::*;
pub use signal::*;
pub use stat_card::*;
