pub use self::{blacklist::*, sweep::*};

mod blacklist;
mod sweep;
