mod notifications;
mod profiles;
mod saved_jobs;
mod transaction;
mod users;

pub use notifications::NotificationRepository;
pub use profiles::{ProfileRepository, StoredUpload};
pub use saved_jobs::SavedJobRepository;
pub use transaction::TransactionGuard;
pub use users::UserRepository;
