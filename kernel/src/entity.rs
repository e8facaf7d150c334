pub use self::{blacklist::*, book::*, loan::*, student::*};

mod blacklist;
mod book;
mod loan;
mod student;
