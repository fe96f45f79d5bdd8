pub mod product;
pub mod cart_line;

pub use product::*;
pub use cart_line::*;
