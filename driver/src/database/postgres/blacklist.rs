use error_stack::Report;
use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};
use time::Date;
use uuid::Uuid;

use kernel::interface::query::BlacklistQuery;
use kernel::interface::update::BlacklistModifier;
use kernel::prelude::entity::{
    BlacklistDetail, BlacklistEntry, BlacklistId, BookId, BookTitle, DueDate, StudentId,
    StudentName,
};
use kernel::KernelError;

use crate::error::ConvertError;

pub struct PostgresBlacklistRepository;

#[async_trait::async_trait]
impl BlacklistQuery<PoolConnection<Postgres>> for PostgresBlacklistRepository {
    async fn find_all(
        &self,
        con: &mut PoolConnection<Postgres>,
    ) -> error_stack::Result<Vec<BlacklistEntry>, KernelError> {
        PgBlacklistInternal::find_all(con).await
    }

    async fn find_by_student_and_book(
        &self,
        con: &mut PoolConnection<Postgres>,
        student_id: &StudentId,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BlacklistEntry>, KernelError> {
        PgBlacklistInternal::find_by_student_and_book(con, student_id, book_id).await
    }

    async fn find_all_details(
        &self,
        con: &mut PoolConnection<Postgres>,
    ) -> error_stack::Result<Vec<BlacklistDetail>, KernelError> {
        PgBlacklistInternal::find_all_details(con).await
    }
}

#[async_trait::async_trait]
impl BlacklistModifier<PoolConnection<Postgres>> for PostgresBlacklistRepository {
    async fn create(
        &self,
        con: &mut PoolConnection<Postgres>,
        student_id: &StudentId,
        book_id: &BookId,
    ) -> error_stack::Result<BlacklistEntry, KernelError> {
        PgBlacklistInternal::create(con, student_id, book_id).await
    }

    async fn delete(
        &self,
        con: &mut PoolConnection<Postgres>,
        id: &BlacklistId,
    ) -> error_stack::Result<(), KernelError> {
        PgBlacklistInternal::delete(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct BlacklistRow {
    blacklist_id: Uuid,
    student_id: i64,
    book_id: String,
}

impl From<BlacklistRow> for BlacklistEntry {
    fn from(value: BlacklistRow) -> Self {
        BlacklistEntry::new(
            BlacklistId::new(value.blacklist_id),
            StudentId::new(value.student_id),
            BookId::new(value.book_id),
        )
    }
}

#[derive(sqlx::FromRow)]
struct BlacklistDetailRow {
    book_id: String,
    book_title: String,
    student_id: i64,
    student_name: String,
    due_date: Option<Date>,
}

impl TryFrom<BlacklistDetailRow> for BlacklistDetail {
    type Error = Report<KernelError>;

    fn try_from(value: BlacklistDetailRow) -> Result<Self, Self::Error> {
        // The join is restricted to live loans, which always carry a due
        // date. A NULL here means the stored data is broken.
        let due_date = value.due_date.ok_or_else(|| {
            Report::new(KernelError::Integrity).attach_printable(format!(
                "blacklist detail for student {} book {} lacks a due date",
                value.student_id, value.book_id
            ))
        })?;
        Ok(BlacklistDetail::new(
            BookId::new(value.book_id),
            BookTitle::new(value.book_title),
            StudentId::new(value.student_id),
            StudentName::new(value.student_name),
            DueDate::new(due_date),
        ))
    }
}

pub(in crate::database) struct PgBlacklistInternal;

impl PgBlacklistInternal {
    async fn find_all(
        con: &mut PgConnection,
    ) -> error_stack::Result<Vec<BlacklistEntry>, KernelError> {
        let rows = sqlx::query_as::<_, BlacklistRow>(
            // language=postgresql
            r#"
            SELECT
                blacklist_id,
                student_id,
                book_id
            FROM
                blacklist
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(BlacklistEntry::from).collect())
    }

    async fn find_by_student_and_book(
        con: &mut PgConnection,
        student_id: &StudentId,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BlacklistEntry>, KernelError> {
        let rows = sqlx::query_as::<_, BlacklistRow>(
            // language=postgresql
            r#"
            SELECT
                blacklist_id,
                student_id,
                book_id
            FROM
                blacklist
            WHERE
                student_id = $1 AND book_id = $2
            "#,
        )
        .bind(student_id.as_ref())
        .bind(book_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(BlacklistEntry::from).collect())
    }

    async fn find_all_details(
        con: &mut PgConnection,
    ) -> error_stack::Result<Vec<BlacklistDetail>, KernelError> {
        let rows = sqlx::query_as::<_, BlacklistDetailRow>(
            // language=postgresql
            r#"
            SELECT
                b.book_id,
                b.book_title,
                s.student_id,
                s.student_name,
                bb.due_date
            FROM
                blacklist bl
                    JOIN
                borrow_books bb ON bl.student_id = bb.student_id AND bl.book_id = bb.book_id
                    JOIN
                books b ON bb.book_id = b.book_id
                    JOIN
                students s ON bl.student_id = s.student_id
            WHERE
                bb.is_returned = FALSE
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(BlacklistDetail::try_from).collect()
    }

    async fn create(
        con: &mut PgConnection,
        student_id: &StudentId,
        book_id: &BookId,
    ) -> error_stack::Result<BlacklistEntry, KernelError> {
        let id = BlacklistId::new(Uuid::new_v4());
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO blacklist (blacklist_id, student_id, book_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id.as_ref())
        .bind(student_id.as_ref())
        .bind(book_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(BlacklistEntry::new(id, *student_id, book_id.clone()))
    }

    async fn delete(
        con: &mut PgConnection,
        id: &BlacklistId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM blacklist
            WHERE blacklist_id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
