use time::Date;

use kernel::interface::database::{
    DependOnDatabaseConnection, QueryDatabaseConnection, Transaction,
};
use kernel::interface::query::{BlacklistQuery, DependOnBlacklistQuery};
use kernel::interface::update::{BlacklistModifier, DependOnBlacklistModifier};
use kernel::prelude::entity::BlacklistId;
use kernel::KernelError;

use crate::service::today_in_indochina;
use crate::transfer::{BlacklistDetailDto, BlacklistEntryDto, RemoveBlacklistDto};

/// Fine accrued per day a loan stays out past its due date (riel).
pub const DAILY_FINE_RATE: i64 = 500;

#[async_trait::async_trait]
pub trait GetBlacklistService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBlacklistQuery<Connection>
{
    async fn get_all(&self) -> error_stack::Result<Vec<BlacklistEntryDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let entries = self.blacklist_query().find_all(&mut connection).await?;
        Ok(entries.into_iter().map(BlacklistEntryDto::from).collect())
    }

    /// Detail rows with the penalty owed as of today. Any row the store
    /// cannot complete fails the whole read; no partial fines are returned.
    async fn get_blacklist_details(
        &self,
    ) -> error_stack::Result<Vec<BlacklistDetailDto>, KernelError> {
        self.get_blacklist_details_at(today_in_indochina()).await
    }

    async fn get_blacklist_details_at(
        &self,
        today: Date,
    ) -> error_stack::Result<Vec<BlacklistDetailDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let details = self
            .blacklist_query()
            .find_all_details(&mut connection)
            .await?;
        Ok(details
            .into_iter()
            .map(|detail| BlacklistDetailDto::from_detail(detail, today, DAILY_FINE_RATE))
            .collect())
    }
}

impl<Connection: Transaction + Send, T> GetBlacklistService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBlacklistQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait RemoveBlacklistService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBlacklistModifier<Connection>
{
    async fn remove(&self, dto: RemoveBlacklistDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BlacklistId::new(dto.id);
        self.blacklist_modifier().delete(&mut connection, &id).await
    }
}

impl<Connection: Transaction + Send, T> RemoveBlacklistService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBlacklistModifier<Connection>
{
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use kernel::prelude::entity::{
        BlacklistDetail, BookId, BookTitle, DueDate, StudentId, StudentName,
    };
    use kernel::KernelError;

    use crate::service::mock::MockDatabase;
    use crate::service::{GetBlacklistService, RemoveBlacklistService};
    use crate::transfer::RemoveBlacklistDto;

    fn detail(student_id: i64, book_id: &str, due_date: time::Date) -> BlacklistDetail {
        BlacklistDetail::new(
            BookId::new(book_id),
            BookTitle::new("Systems Programming"),
            StudentId::new(student_id),
            StudentName::new("Sokha"),
            DueDate::new(due_date),
        )
    }

    #[tokio::test]
    async fn details_carry_the_accrued_penalty() {
        let db = MockDatabase::default();
        db.put_details(vec![detail(42, "B1", date!(2024 - 01 - 15))]);

        let details = db
            .get_blacklist_details_at(date!(2024 - 01 - 20))
            .await
            .unwrap();

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].penalty, 2500);
        assert_eq!(details[0].due_date, date!(2024 - 01 - 15));
    }

    #[tokio::test]
    async fn penalty_is_zero_before_the_due_date() {
        let db = MockDatabase::default();
        db.put_details(vec![detail(42, "B1", date!(2024 - 02 - 01))]);

        let details = db
            .get_blacklist_details_at(date!(2024 - 01 - 20))
            .await
            .unwrap();

        assert_eq!(details[0].penalty, 0);
    }

    #[tokio::test]
    async fn broken_detail_join_fails_the_whole_read() {
        let db = MockDatabase::default();
        db.put_details(vec![detail(42, "B1", date!(2024 - 01 - 15))]);
        db.break_detail_join();

        let result = db.get_blacklist_details_at(date!(2024 - 01 - 20)).await;

        let report = result.unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Integrity));
    }

    #[tokio::test]
    async fn removed_entry_no_longer_listed() {
        let db = MockDatabase::default();
        let entry = db.insert_entry(42, "B1");

        assert_eq!(db.get_all().await.unwrap().len(), 1);

        db.remove(RemoveBlacklistDto {
            id: (*entry.id()).into(),
        })
        .await
        .unwrap();

        assert!(db.get_all().await.unwrap().is_empty());
    }
}
