mod id;
mod title;

pub use self::{id::*, title::*};
