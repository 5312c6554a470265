//! Employer onboarding wizard steps.

use axum::Json;
use jobgrid_core::models::{employer_onboarding_steps, OnboardingStep};

/// The employer onboarding steps, in wizard order. The list is static; the
/// frontend stepper walks it linearly.
#[utoipa::path(
    get,
    path = "/api/v1/onboarding/steps",
    tag = "onboarding",
    responses(
        (status = 200, description = "Steps in order", body = [OnboardingStep]),
    )
)]
pub async fn onboarding_steps() -> Json<Vec<OnboardingStep>> {
    Json(employer_onboarding_steps())
}
