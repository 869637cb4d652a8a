pub mod config;
pub mod error;
pub mod types;
pub mod video_id;

// Keep the public surface small and intentional.
pub use config::*;
pub use error::*;
pub use types::*;
pub use video_id::*;
