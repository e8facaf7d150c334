use crate::database::Transaction;
use crate::entity::{BlacklistEntry, BlacklistId, BookId, StudentId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BlacklistModifier<Connection: Transaction>: Sync + Send + 'static {
    /// Inserts a delinquency record for the pair, assigning a fresh id.
    async fn create(
        &self,
        con: &mut Connection,
        student_id: &StudentId,
        book_id: &BookId,
    ) -> error_stack::Result<BlacklistEntry, KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        id: &BlacklistId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBlacklistModifier<Connection: Transaction>: Sync + Send + 'static {
    type BlacklistModifier: BlacklistModifier<Connection>;
    fn blacklist_modifier(&self) -> &Self::BlacklistModifier;
}
