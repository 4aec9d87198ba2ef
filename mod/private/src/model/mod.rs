mod category;
mod order;
mod product;

pub use category::*;
pub use order::*;
pub use product::*;
