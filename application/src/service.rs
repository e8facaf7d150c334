pub use self::{blacklist::*, sweep::*};

mod blacklist;
#[cfg(test)]
pub(crate) mod mock;
mod sweep;

use time::macros::offset;
use time::{Date, OffsetDateTime};

/// Current calendar date in Indochina time (UTC+7), the library's zone.
pub(crate) fn today_in_indochina() -> Date {
    OffsetDateTime::now_utc().to_offset(offset!(+7)).date()
}
