use error_stack::Report;
use sqlx::pool::PoolConnection;
use sqlx::{Error, Pool, Postgres};

use kernel::interface::database::QueryDatabaseConnection;
use kernel::interface::query::{DependOnBlacklistQuery, DependOnLoanQuery};
use kernel::interface::update::DependOnBlacklistModifier;
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{blacklist::*, loan::*};

mod blacklist;
mod loan;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        tracing::debug!("connecting postgres pool");
        let pool = Pool::connect(&url).await.convert_error()?;
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl QueryDatabaseConnection<PoolConnection<Postgres>> for PostgresDatabase {
    async fn transact(&self) -> error_stack::Result<PoolConnection<Postgres>, KernelError> {
        let con = self.pool.acquire().await.convert_error()?;
        Ok(con)
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}

impl DependOnLoanQuery<PoolConnection<Postgres>> for PostgresDatabase {
    type LoanQuery = PostgresLoanRepository;
    fn loan_query(&self) -> &Self::LoanQuery {
        &PostgresLoanRepository
    }
}

impl DependOnBlacklistQuery<PoolConnection<Postgres>> for PostgresDatabase {
    type BlacklistQuery = PostgresBlacklistRepository;
    fn blacklist_query(&self) -> &Self::BlacklistQuery {
        &PostgresBlacklistRepository
    }
}

impl DependOnBlacklistModifier<PoolConnection<Postgres>> for PostgresDatabase {
    type BlacklistModifier = PostgresBlacklistRepository;
    fn blacklist_modifier(&self) -> &Self::BlacklistModifier {
        &PostgresBlacklistRepository
    }
}
