use driver::database::PostgresDatabase;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

/// Shared application state. Cloning is cheap; the router and the
/// sweep trigger both hold one.
#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let handler = Handler::init().await?;
        Ok(Self(Arc::new(handler)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

/// Owns the postgres pool backing the loan and blacklist stores.
#[derive(References)]
pub struct Handler {
    storage: PostgresDatabase,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let storage = PostgresDatabase::new().await?;

        Ok(Self { storage })
    }
}
