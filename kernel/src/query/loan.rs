use crate::database::Transaction;
use crate::entity::Loan;
use crate::KernelError;

#[async_trait::async_trait]
pub trait LoanQuery<Connection: Transaction>: Sync + Send + 'static {
    /// Full, unpaginated read of every loan record. A sweep reads once and
    /// never re-queries mid-run.
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Loan>, KernelError>;
}

pub trait DependOnLoanQuery<Connection: Transaction>: Sync + Send + 'static {
    type LoanQuery: LoanQuery<Connection>;
    fn loan_query(&self) -> &Self::LoanQuery;
}
