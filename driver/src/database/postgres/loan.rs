use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};
use time::Date;

use kernel::interface::query::LoanQuery;
use kernel::prelude::entity::{BookId, BorrowDate, Loan, StudentId};
use kernel::KernelError;

use crate::error::ConvertError;

pub struct PostgresLoanRepository;

#[async_trait::async_trait]
impl LoanQuery<PoolConnection<Postgres>> for PostgresLoanRepository {
    async fn find_all(
        &self,
        con: &mut PoolConnection<Postgres>,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        PgLoanInternal::find_all(con).await
    }
}

#[derive(sqlx::FromRow)]
struct LoanRow {
    student_id: i64,
    book_id: String,
    borrow_date: Date,
    is_returned: bool,
}

impl From<LoanRow> for Loan {
    fn from(value: LoanRow) -> Self {
        Loan::new(
            StudentId::new(value.student_id),
            BookId::new(value.book_id),
            BorrowDate::new(value.borrow_date),
            value.is_returned,
        )
    }
}

pub(in crate::database) struct PgLoanInternal;

impl PgLoanInternal {
    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Loan>, KernelError> {
        let rows = sqlx::query_as::<_, LoanRow>(
            // language=postgresql
            r#"
            SELECT
                student_id,
                book_id,
                borrow_date,
                is_returned
            FROM
                borrow_books
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Loan::from).collect())
    }
}
