//! Shopping cart module.

mod cart;

pub use cart::{CartLine, CartState};
