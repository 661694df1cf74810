//! One repository per entity, bundled for injection into the HTTP layer.

use std::sync::Arc;

use dineflow_core::types::RecordId;

use crate::error::StoreError;
use crate::models::bill::Bill;
use crate::models::broadcast::Broadcast;
use crate::models::complaint::Complaint;
use crate::models::guest_payment::GuestPayment;
use crate::models::menu::WeeklyMenu;
use crate::models::settings::MessSettings;
use crate::models::student::{Student, StudentRequest};
use crate::models::suggestion::Suggestion;
use crate::store::{
    MemoryRepository, MemorySingleton, PgRepository, PgSingleton, Repository, SingletonStore,
};
use crate::DbPool;

/// Generate an id for a newly created record.
pub fn new_id() -> RecordId {
    uuid::Uuid::new_v4().to_string()
}

fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Every store the route layer needs. Cheap to clone.
#[derive(Clone)]
pub struct Repositories {
    pub students: Arc<dyn Repository<Student>>,
    pub student_requests: Arc<dyn Repository<StudentRequest>>,
    pub complaints: Arc<dyn Repository<Complaint>>,
    pub suggestions: Arc<dyn Repository<Suggestion>>,
    pub bills: Arc<dyn Repository<Bill>>,
    pub broadcasts: Arc<dyn Repository<Broadcast>>,
    pub guest_payments: Arc<dyn Repository<GuestPayment>>,
    pub settings: Arc<dyn SingletonStore<MessSettings>>,
    pub menu: Arc<dyn SingletonStore<WeeklyMenu>>,
    backend: &'static str,
}

impl Repositories {
    /// Process-local stores. Contents are lost on restart.
    pub fn in_memory() -> Self {
        Self {
            students: Arc::new(MemoryRepository::<Student>::new()),
            student_requests: Arc::new(MemoryRepository::<StudentRequest>::new()),
            complaints: Arc::new(MemoryRepository::<Complaint>::new()),
            suggestions: Arc::new(MemoryRepository::<Suggestion>::new()),
            bills: Arc::new(MemoryRepository::<Bill>::new()),
            broadcasts: Arc::new(MemoryRepository::<Broadcast>::new()),
            guest_payments: Arc::new(MemoryRepository::<GuestPayment>::new()),
            settings: Arc::new(MemorySingleton::<MessSettings>::new()),
            menu: Arc::new(MemorySingleton::<WeeklyMenu>::new()),
            backend: "memory",
        }
    }

    /// Stores backed by the `entity_records` / `singleton_records` tables.
    pub fn postgres(pool: DbPool) -> Self {
        Self {
            students: Arc::new(PgRepository::<Student>::new(pool.clone())),
            student_requests: Arc::new(PgRepository::<StudentRequest>::new(pool.clone())),
            complaints: Arc::new(PgRepository::<Complaint>::new(pool.clone())),
            suggestions: Arc::new(PgRepository::<Suggestion>::new(pool.clone())),
            bills: Arc::new(PgRepository::<Bill>::new(pool.clone())),
            broadcasts: Arc::new(PgRepository::<Broadcast>::new(pool.clone())),
            guest_payments: Arc::new(PgRepository::<GuestPayment>::new(pool.clone())),
            settings: Arc::new(PgSingleton::<MessSettings>::new(pool.clone())),
            menu: Arc::new(PgSingleton::<WeeklyMenu>::new(pool)),
            backend: "postgres",
        }
    }

    /// `"memory"` or `"postgres"`.
    pub fn backend_name(&self) -> &'static str {
        self.backend
    }

    /// Seed every store that is still empty. Returns the number of keyed
    /// records inserted.
    pub async fn ensure_seed(&self) -> Result<usize, StoreError> {
        let mut inserted = 0;
        inserted += self.students.ensure_seed().await?;
        inserted += self.student_requests.ensure_seed().await?;
        inserted += self.complaints.ensure_seed().await?;
        inserted += self.suggestions.ensure_seed().await?;
        inserted += self.bills.ensure_seed().await?;
        inserted += self.broadcasts.ensure_seed().await?;
        inserted += self.guest_payments.ensure_seed().await?;
        self.settings.ensure_seed().await?;
        self.menu.ensure_seed().await?;
        tracing::debug!(backend = self.backend, inserted, "Seed check complete");
        Ok(inserted)
    }

    // -----------------------------------------------------------------------
    // Lookups spanning records
    // -----------------------------------------------------------------------

    /// Student with the given email, compared case-insensitively.
    pub async fn find_student_by_email(&self, email: &str) -> Result<Option<Student>, StoreError> {
        let students = self.students.list_all().await?;
        Ok(students.into_iter().find(|s| same_email(&s.email, email)))
    }

    /// Pending registration with the given email, compared case-insensitively.
    pub async fn find_request_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StudentRequest>, StoreError> {
        let requests = self.student_requests.list_all().await?;
        Ok(requests.into_iter().find(|r| same_email(&r.email, email)))
    }

    /// Whether a student or a pending registration already uses `email`.
    pub async fn email_in_use(&self, email: &str) -> Result<bool, StoreError> {
        if self.find_student_by_email(email).await?.is_some() {
            return Ok(true);
        }
        Ok(self.find_request_by_email(email).await?.is_some())
    }

    /// Bills of one student in storage order.
    pub async fn bills_for_student(&self, student_id: &str) -> Result<Vec<Bill>, StoreError> {
        let bills = self.bills.list_all().await?;
        Ok(bills.into_iter().filter(|b| b.student_id == student_id).collect())
    }

    /// Complaints submitted by one student, in storage order.
    pub async fn complaints_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<Complaint>, StoreError> {
        let complaints = self.complaints.list_all().await?;
        Ok(complaints
            .into_iter()
            .filter(|c| c.is_owned_by(student_id))
            .collect())
    }
}
