mod profile;
mod register;
mod token;

pub use profile::*;
pub use register::*;
pub use token::*;
