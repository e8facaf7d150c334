use kernel::prelude::entity::{BlacklistDetail, BlacklistEntry, DestructBlacklistDetail};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct BlacklistEntryDto {
    pub id: Uuid,
    pub student_id: i64,
    pub book_id: String,
}

impl From<BlacklistEntry> for BlacklistEntryDto {
    fn from(value: BlacklistEntry) -> Self {
        Self {
            id: (*value.id()).into(),
            student_id: (*value.student_id()).into(),
            book_id: value.book_id().clone().into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BlacklistDetailDto {
    pub book_id: String,
    pub book_title: String,
    pub student_id: i64,
    pub student_name: String,
    pub due_date: Date,
    pub penalty: i64,
}

impl BlacklistDetailDto {
    /// Materializes a detail row, deriving the penalty owed at `today`.
    pub fn from_detail(detail: BlacklistDetail, today: Date, daily_rate: i64) -> Self {
        let penalty = detail.due_date().overdue_fine(today, daily_rate);
        let DestructBlacklistDetail {
            book_id,
            book_title,
            student_id,
            student_name,
            due_date,
        } = detail.into_destruct();
        Self {
            book_id: book_id.into(),
            book_title: book_title.into(),
            student_id: student_id.into(),
            student_name: student_name.into(),
            due_date: due_date.into(),
            penalty,
        }
    }
}

pub struct RemoveBlacklistDto {
    pub id: Uuid,
}
