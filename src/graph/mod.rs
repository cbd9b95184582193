pub mod artifact;
pub mod config;
pub mod conversion;
pub mod definition;

pub use artifact::*;
pub use config::*;
pub use conversion::*;
pub use definition::*;
