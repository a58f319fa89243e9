pub mod constants;
pub mod content;
pub mod data;
pub mod section;
pub mod state;
pub mod tracker;

pub use constants::*;
pub use content::*;
pub use section::*;
pub use state::*;
pub use tracker::*;
