mod histogram;
mod trigger;

pub use self::{histogram::*, trigger::*};
