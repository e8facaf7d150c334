mod id;

pub use self::id::*;

use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

use crate::entity::{BookId, BookTitle, DueDate, StudentId, StudentName};

/// One standing delinquency record for a `(student, book)` pair.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct BlacklistEntry {
    id: BlacklistId,
    student_id: StudentId,
    book_id: BookId,
}

impl BlacklistEntry {
    pub fn new(id: BlacklistId, student_id: StudentId, book_id: BookId) -> Self {
        Self {
            id,
            student_id,
            book_id,
        }
    }
}

/// Joined view over blacklist, loan, book and student records. The penalty
/// is derived at read time and never held here.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BlacklistDetail {
    book_id: BookId,
    book_title: BookTitle,
    student_id: StudentId,
    student_name: StudentName,
    due_date: DueDate,
}

impl BlacklistDetail {
    pub fn new(
        book_id: BookId,
        book_title: BookTitle,
        student_id: StudentId,
        student_name: StudentName,
        due_date: DueDate,
    ) -> Self {
        Self {
            book_id,
            book_title,
            student_id,
            student_name,
            due_date,
        }
    }
}
