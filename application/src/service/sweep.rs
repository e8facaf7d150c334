use time::Date;

use kernel::interface::database::{
    DependOnDatabaseConnection, QueryDatabaseConnection, Transaction,
};
use kernel::interface::query::{
    BlacklistQuery, DependOnBlacklistQuery, DependOnLoanQuery, LoanQuery,
};
use kernel::interface::update::{BlacklistModifier, DependOnBlacklistModifier};
use kernel::KernelError;

use crate::service::today_in_indochina;
use crate::transfer::SweepSummaryDto;

/// Days a loan may stay out before its borrower is blacklisted.
pub const GRACE_DAYS: i64 = 14;

#[async_trait::async_trait]
pub trait SweepService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnLoanQuery<Connection>
    + DependOnBlacklistQuery<Connection>
    + DependOnBlacklistModifier<Connection>
{
    /// Scans every loan once and enrolls overdue `(student, book)` pairs
    /// into the blacklist. The reference date is fixed at sweep start.
    async fn run_sweep(&self) -> error_stack::Result<SweepSummaryDto, KernelError> {
        self.run_sweep_at(today_in_indochina()).await
    }

    async fn run_sweep_at(
        &self,
        today: Date,
    ) -> error_stack::Result<SweepSummaryDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        // Failing the bulk read aborts the sweep; everything after it is
        // isolated per loan.
        let loans = self.loan_query().find_all(&mut connection).await?;

        let mut summary = SweepSummaryDto {
            scanned: loans.len(),
            ..SweepSummaryDto::default()
        };

        for loan in loans {
            if !loan.is_overdue(today, GRACE_DAYS) {
                continue;
            }

            let student_id = loan.student_id();
            let book_id = loan.book_id();

            let existing = match self
                .blacklist_query()
                .find_by_student_and_book(&mut connection, student_id, book_id)
                .await
            {
                Ok(entries) => entries,
                Err(report) => {
                    // Skip rather than risk a duplicate insert.
                    tracing::warn!(
                        "blacklist existence check failed for student {:?} book {:?}: {report:?}",
                        student_id,
                        book_id
                    );
                    summary.failed += 1;
                    continue;
                }
            };

            if !existing.is_empty() {
                summary.already_listed += 1;
                continue;
            }

            match self
                .blacklist_modifier()
                .create(&mut connection, student_id, book_id)
                .await
            {
                Ok(entry) => {
                    tracing::info!(
                        "blacklisted student {:?} book {:?} as {:?}",
                        student_id,
                        book_id,
                        entry.id()
                    );
                    summary.newly_listed += 1;
                }
                Err(report) => {
                    tracing::warn!(
                        "blacklist insert failed for student {:?} book {:?}: {report:?}",
                        student_id,
                        book_id
                    );
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

impl<Connection: Transaction + Send, T> SweepService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnLoanQuery<Connection>
        + DependOnBlacklistQuery<Connection>
        + DependOnBlacklistModifier<Connection>
{
}
