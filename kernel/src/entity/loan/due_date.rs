use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DueDate(Date);

impl DueDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    /// Fine owed at `today`: one `daily_rate` per whole day past the due
    /// date, zero at or before it.
    pub fn overdue_fine(&self, today: Date, daily_rate: i64) -> i64 {
        let overdue_days = (today - self.0).whole_days();
        if overdue_days > 0 {
            overdue_days * daily_rate
        } else {
            0
        }
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use time::Duration;

    use crate::entity::DueDate;

    #[test]
    fn no_fine_at_or_before_due_date() {
        let due = DueDate::new(date!(2024 - 01 - 15));
        assert_eq!(due.overdue_fine(date!(2024 - 01 - 15), 500), 0);
        assert_eq!(due.overdue_fine(date!(2024 - 01 - 01), 500), 0);
    }

    #[test]
    fn one_rate_per_overdue_day() {
        let due = DueDate::new(date!(2024 - 01 - 15));
        assert_eq!(due.overdue_fine(date!(2024 - 01 - 16), 500), 500);
        assert_eq!(due.overdue_fine(date!(2024 - 01 - 20), 500), 2500);
    }

    #[test]
    fn fine_never_decreases_as_days_pass() {
        let due = DueDate::new(date!(2024 - 01 - 15));
        let mut today = date!(2024 - 01 - 01);
        let mut last = 0;
        while today < date!(2024 - 03 - 01) {
            let fine = due.overdue_fine(today, 500);
            assert!(fine >= last);
            last = fine;
            today += Duration::days(1);
        }
    }
}
