pub use self::blacklist::*;

mod blacklist;
