//! Domain models shared across the workspace.

mod notification;
mod onboarding;
mod pagination;
mod profile;
mod saved_job;
mod upload;
mod user;

pub use notification::{Notification, NotificationKind};
pub use onboarding::{employer_onboarding_steps, OnboardingStep};
pub use pagination::PaginationMeta;
pub use profile::{AccountType, Profile, ProfileUpdate};
pub use saved_job::SavedJob;
pub use upload::UploadResult;
pub use user::{User, UserResponse};
