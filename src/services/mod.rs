pub mod chat;
pub mod profile;
pub mod report;

use std::sync::Arc;
use tokio::sync::RwLock;

/// The single report store, shared by handlers. The lock is the external
/// serialization the store itself does not provide.
pub type SharedReportStore = Arc<RwLock<report::ReportStore>>;

pub type SharedProfile = Arc<RwLock<profile::ProfileService>>;

pub fn shared_store(store: report::ReportStore) -> SharedReportStore {
    Arc::new(RwLock::new(store))
}

pub fn shared_profile(service: profile::ProfileService) -> SharedProfile {
    Arc::new(RwLock::new(service))
}
