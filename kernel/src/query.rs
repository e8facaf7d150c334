pub use self::{blacklist::*, loan::*};

mod blacklist;
mod loan;
