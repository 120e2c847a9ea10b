pub mod chat;
pub mod profile;
pub mod report;

pub use chat::ChatMessage;
pub use profile::UserProfile;
pub use report::{Category, EmergencyReport, NewReport, ReportPatch, Severity, Status};
