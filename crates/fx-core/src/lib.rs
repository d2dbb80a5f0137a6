pub mod constants;
pub mod error;
pub mod oscillator;
pub mod starfield;
pub mod surface;
pub mod trail;

pub use constants::*;
pub use error::*;
pub use oscillator::*;
pub use starfield::*;
pub use surface::*;
pub use trail::*;
