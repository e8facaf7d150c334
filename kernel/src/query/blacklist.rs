use crate::database::Transaction;
use crate::entity::{BlacklistDetail, BlacklistEntry, BookId, StudentId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BlacklistQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<BlacklistEntry>, KernelError>;

    async fn find_by_student_and_book(
        &self,
        con: &mut Connection,
        student_id: &StudentId,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BlacklistEntry>, KernelError>;

    /// Joined rows for every blacklisted pair whose loan is still out.
    /// A row lacking a due date is a [`KernelError::Integrity`] failure for
    /// the whole read, never a silent zero.
    async fn find_all_details(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<BlacklistDetail>, KernelError>;
}

pub trait DependOnBlacklistQuery<Connection: Transaction>: Sync + Send + 'static {
    type BlacklistQuery: BlacklistQuery<Connection>;
    fn blacklist_query(&self) -> &Self::BlacklistQuery;
}
