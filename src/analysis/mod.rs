mod analyzer;
mod counts;
mod export;
mod input;
mod optical;
mod thermo;
mod tm;
mod types;

pub use analyzer::*;
pub use counts::*;
pub use export::*;
pub use input::*;
pub use optical::*;
pub use thermo::*;
pub use tm::*;
pub use types::*;
