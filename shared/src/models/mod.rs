//! Domain models for the Reelcast forecast pipeline

mod forecast;
mod location;
mod species;
mod weather;

pub use forecast::*;
pub use location::*;
pub use species::*;
pub use weather::*;
