use serde::Serialize;
use utoipa::ToSchema;

/// One step of the employer onboarding wizard. `component` names the frontend
/// component that renders the step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OnboardingStep {
    pub key: String,
    pub title: String,
    pub description: String,
    pub component: String,
}

impl OnboardingStep {
    fn new(key: &str, title: &str, description: &str, component: &str) -> Self {
        OnboardingStep {
            key: key.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            component: component.to_string(),
        }
    }
}

/// Ordered steps shown to newly registered employer accounts. The order is
/// part of the contract with the frontend wizard.
pub fn employer_onboarding_steps() -> Vec<OnboardingStep> {
    vec![
        OnboardingStep::new(
            "company-profile",
            "Tell us about your company",
            "Add your company name, industry, and a short description so candidates know who is hiring.",
            "CompanyProfileForm",
        ),
        OnboardingStep::new(
            "company-branding",
            "Add your branding",
            "Upload a logo and pick a banner so your job posts stand out in search results.",
            "CompanyBrandingForm",
        ),
        OnboardingStep::new(
            "first-job-post",
            "Create your first job post",
            "Describe the role, location, and salary range to start receiving applications.",
            "JobPostForm",
        ),
        OnboardingStep::new(
            "review-and-publish",
            "Review and publish",
            "Double-check your company page, then publish your first job post.",
            "OnboardingReview",
        ),
    ]
}
