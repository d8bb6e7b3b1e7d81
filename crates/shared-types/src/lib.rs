pub mod error;

// Traffic domain modules
pub mod ambulance;
pub mod analysis;
pub mod config;
pub mod emergency;
pub mod junction;

pub use error::*;

pub use ambulance::*;
pub use analysis::*;
pub use config::*;
pub use emergency::*;
pub use junction::*;
