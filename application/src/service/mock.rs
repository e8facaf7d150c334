use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::QueryDatabaseConnection;
use kernel::interface::query::{BlacklistQuery, DependOnBlacklistQuery, DependOnLoanQuery, LoanQuery};
use kernel::interface::update::{BlacklistModifier, DependOnBlacklistModifier};
use kernel::prelude::entity::{
    BlacklistDetail, BlacklistEntry, BlacklistId, BookId, Loan, StudentId,
};
use kernel::KernelError;

pub struct MockConnection;

#[derive(Default)]
struct MockState {
    loans: Vec<Loan>,
    entries: Vec<BlacklistEntry>,
    details: Vec<BlacklistDetail>,
    fail_insert: HashSet<String>,
    fail_existence: HashSet<String>,
    broken_detail_join: bool,
}

/// In-memory stand-in for the loan and blacklist stores.
#[derive(Default, Clone)]
pub struct MockDatabase {
    state: Arc<Mutex<MockState>>,
}

impl MockDatabase {
    pub fn put_loans(&self, loans: Vec<Loan>) {
        self.state.lock().unwrap().loans = loans;
    }

    pub fn put_details(&self, details: Vec<BlacklistDetail>) {
        self.state.lock().unwrap().details = details;
    }

    pub fn insert_entry(&self, student_id: i64, book_id: &str) -> BlacklistEntry {
        let entry = BlacklistEntry::new(
            BlacklistId::new(Uuid::new_v4()),
            StudentId::new(student_id),
            BookId::new(book_id),
        );
        self.state.lock().unwrap().entries.push(entry.clone());
        entry
    }

    pub fn fail_insert_for(&self, book_id: &str) {
        self.state.lock().unwrap().fail_insert.insert(book_id.to_string());
    }

    pub fn fail_existence_check_for(&self, book_id: &str) {
        self.state
            .lock()
            .unwrap()
            .fail_existence
            .insert(book_id.to_string());
    }

    pub fn break_detail_join(&self) {
        self.state.lock().unwrap().broken_detail_join = true;
    }

    pub fn entries(&self) -> Vec<BlacklistEntry> {
        self.state.lock().unwrap().entries.clone()
    }
}

#[async_trait::async_trait]
impl QueryDatabaseConnection<MockConnection> for MockDatabase {
    async fn transact(&self) -> error_stack::Result<MockConnection, KernelError> {
        Ok(MockConnection)
    }
}

#[async_trait::async_trait]
impl LoanQuery<MockConnection> for MockDatabase {
    async fn find_all(
        &self,
        _con: &mut MockConnection,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        Ok(self.state.lock().unwrap().loans.clone())
    }
}

#[async_trait::async_trait]
impl BlacklistQuery<MockConnection> for MockDatabase {
    async fn find_all(
        &self,
        _con: &mut MockConnection,
    ) -> error_stack::Result<Vec<BlacklistEntry>, KernelError> {
        Ok(self.state.lock().unwrap().entries.clone())
    }

    async fn find_by_student_and_book(
        &self,
        _con: &mut MockConnection,
        student_id: &StudentId,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BlacklistEntry>, KernelError> {
        let state = self.state.lock().unwrap();
        if state.fail_existence.contains(book_id.as_ref()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable("mock existence check failure"));
        }
        Ok(state
            .entries
            .iter()
            .filter(|entry| entry.student_id() == student_id && entry.book_id() == book_id)
            .cloned()
            .collect())
    }

    async fn find_all_details(
        &self,
        _con: &mut MockConnection,
    ) -> error_stack::Result<Vec<BlacklistDetail>, KernelError> {
        let state = self.state.lock().unwrap();
        if state.broken_detail_join {
            return Err(
                Report::new(KernelError::Integrity).attach_printable("mock detail row lacks a due date")
            );
        }
        Ok(state.details.clone())
    }
}

#[async_trait::async_trait]
impl BlacklistModifier<MockConnection> for MockDatabase {
    async fn create(
        &self,
        _con: &mut MockConnection,
        student_id: &StudentId,
        book_id: &BookId,
    ) -> error_stack::Result<BlacklistEntry, KernelError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_insert.contains(book_id.as_ref()) {
            return Err(Report::new(KernelError::Internal).attach_printable("mock insert failure"));
        }
        let entry = BlacklistEntry::new(
            BlacklistId::new(Uuid::new_v4()),
            *student_id,
            book_id.clone(),
        );
        state.entries.push(entry.clone());
        Ok(entry)
    }

    async fn delete(
        &self,
        _con: &mut MockConnection,
        id: &BlacklistId,
    ) -> error_stack::Result<(), KernelError> {
        self.state.lock().unwrap().entries.retain(|entry| entry.id() != id);
        Ok(())
    }
}

impl DependOnLoanQuery<MockConnection> for MockDatabase {
    type LoanQuery = MockDatabase;
    fn loan_query(&self) -> &Self::LoanQuery {
        self
    }
}

impl DependOnBlacklistQuery<MockConnection> for MockDatabase {
    type BlacklistQuery = MockDatabase;
    fn blacklist_query(&self) -> &Self::BlacklistQuery {
        self
    }
}

impl DependOnBlacklistModifier<MockConnection> for MockDatabase {
    type BlacklistModifier = MockDatabase;
    fn blacklist_modifier(&self) -> &Self::BlacklistModifier {
        self
    }
}
