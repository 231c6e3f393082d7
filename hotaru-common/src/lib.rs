pub mod color;

mod payload;
mod value;

pub use payload::*;
pub use value::*;
