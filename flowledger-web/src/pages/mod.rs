mod add_record;
mod add_target;
mod admin_records;
mod dashboard;
mod error;
mod import;
pub mod login;
mod reconciliation;
mod records;

pub use add_record::AddRecordPage;
pub use add_target::AddTargetPage;
pub use admin_records::AdminRecordsPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use import::ImportPage;
pub use login::LoginPage;
pub use reconciliation::ReconciliationPage;
pub use records::RecordsPage;
