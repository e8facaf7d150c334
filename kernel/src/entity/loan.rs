mod borrow_date;
mod due_date;

pub use self::{borrow_date::*, due_date::*};

use destructure::{Destructure, Mutation};
use time::{Date, Duration};
use vodca::References;

use crate::entity::{BookId, StudentId};

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Loan {
    student_id: StudentId,
    book_id: BookId,
    borrow_date: BorrowDate,
    returned: bool,
}

impl Loan {
    pub fn new(
        student_id: StudentId,
        book_id: BookId,
        borrow_date: BorrowDate,
        returned: bool,
    ) -> Self {
        Self {
            student_id,
            book_id,
            borrow_date,
            returned,
        }
    }

    /// A loan is overdue once it stays unreturned past the grace period.
    pub fn is_overdue(&self, today: Date, grace_days: i64) -> bool {
        !self.returned && *self.borrow_date.as_ref() <= today - Duration::days(grace_days)
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use crate::entity::{BookId, BorrowDate, Loan, StudentId};

    fn loan(borrow_date: time::Date, returned: bool) -> Loan {
        Loan::new(
            StudentId::new(42),
            BookId::new("B1"),
            BorrowDate::new(borrow_date),
            returned,
        )
    }

    #[test]
    fn unreturned_loan_past_grace_is_overdue() {
        let loan = loan(date!(2024 - 01 - 01), false);
        assert!(loan.is_overdue(date!(2024 - 01 - 20), 14));
    }

    #[test]
    fn grace_boundary_is_inclusive() {
        let loan = loan(date!(2024 - 01 - 01), false);
        assert!(loan.is_overdue(date!(2024 - 01 - 15), 14));
        assert!(!loan.is_overdue(date!(2024 - 01 - 14), 14));
    }

    #[test]
    fn returned_loan_is_never_overdue() {
        let loan = loan(date!(2024 - 01 - 01), true);
        assert!(!loan.is_overdue(date!(2024 - 12 - 31), 14));
    }
}
