pub use self::blacklist::BlacklistRouter;

mod blacklist;
