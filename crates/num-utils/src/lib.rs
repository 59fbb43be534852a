pub mod float;

mod div;
mod mul;
mod radix;

pub use self::{div::*, mul::*, radix::*};
