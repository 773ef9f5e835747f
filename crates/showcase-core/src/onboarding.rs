//! Onboarding Form
//!
//! Three-step workspace signup: organization, billing, confirmation. Each
//! step validates only its own fields before advancing; submit re-validates
//! every step and jumps back to the first one that fails.

use std::sync::OnceLock;

use regex::Regex;

pub const TEAM_SIZES: [&str; 4] = ["1–10", "11–50", "51–200", "200+"];

pub const INDUSTRIES: [&str; 6] = [
    "Technology",
    "Finance",
    "Healthcare",
    "Education",
    "Retail",
    "Other",
];

/// Host prefix of the workspace URL
pub const WORKSPACE_HOST: &str = "teams-hq.io";

const SLUG_MAX: usize = 32;

static SLUG_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static CARD_RE: OnceLock<Regex> = OnceLock::new();
static EXPIRY_RE: OnceLock<Regex> = OnceLock::new();
static CVC_RE: OnceLock<Regex> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Regex>, src: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(src).expect("static pattern compiles"))
}

// ========================
// Steps + Fields
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    Organization,
    Billing,
    Confirm,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Organization, Step::Billing, Step::Confirm];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Clamp an index into the step range
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Organization => "Organization",
            Step::Billing => "Billing",
            Step::Confirm => "Confirm",
        }
    }

    /// Fields validated when leaving this step
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            Step::Organization => &[
                FormField::Org,
                FormField::Slug,
                FormField::Size,
                FormField::Industry,
            ],
            Step::Billing => &[
                FormField::Email,
                FormField::Plan,
                FormField::CardName,
                FormField::CardNumber,
                FormField::Expiry,
                FormField::Cvc,
            ],
            Step::Confirm => &[FormField::Accept],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Org,
    Slug,
    Size,
    Industry,
    Email,
    Plan,
    CardName,
    CardNumber,
    Expiry,
    Cvc,
    Coupon,
    Accept,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Org => "Organization",
            FormField::Slug => "Workspace URL",
            FormField::Size => "Team size",
            FormField::Industry => "Industry",
            FormField::Email => "Billing email",
            FormField::Plan => "Plan",
            FormField::CardName => "Cardholder name",
            FormField::CardNumber => "Card number",
            FormField::Expiry => "Expiry",
            FormField::Cvc => "CVC",
            FormField::Coupon => "Coupon (optional)",
            FormField::Accept => "Terms",
        }
    }
}

// ========================
// Plans
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Plan {
    Starter,
    #[default]
    Pro,
    Enterprise,
}

/// Marketing copy for a plan card
pub struct PlanCopy {
    pub title: &'static str,
    pub price: &'static str,
    pub perks: &'static [&'static str],
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Starter, Plan::Pro, Plan::Enterprise];

    pub fn copy(&self) -> PlanCopy {
        match self {
            Plan::Starter => PlanCopy {
                title: "Starter",
                price: "$0",
                perks: &["1 project", "Community support"],
            },
            Plan::Pro => PlanCopy {
                title: "Pro",
                price: "$24",
                perks: &["Unlimited projects", "Email support", "Analytics"],
            },
            Plan::Enterprise => PlanCopy {
                title: "Enterprise",
                price: "Contact us",
                perks: &["SAML SSO", "Audit logs", "Uptime SLA"],
            },
        }
    }
}

// ========================
// Values + Validation
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingValues {
    pub org: String,
    pub slug: String,
    pub size: String,
    pub industry: String,
    pub email: String,
    pub plan: Plan,
    pub card_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub coupon: String,
    pub accept: bool,
}

impl OnboardingValues {
    /// `teams-hq.io/<slug>` once a slug exists
    pub fn workspace_url(&self) -> Option<String> {
        (!self.slug.is_empty()).then(|| format!("{}/{}", WORKSPACE_HOST, self.slug))
    }

    /// Error message for one field, `None` when valid
    pub fn validate_field(&self, field: FormField) -> Option<&'static str> {
        let required = |value: &str, message: &'static str| value.trim().is_empty().then_some(message);
        match field {
            FormField::Org => required(&self.org, "Please enter your org name")
                .or_else(|| (self.org.trim().chars().count() < 2).then_some("Name is too short")),
            FormField::Slug => required(&self.slug, "Please enter a workspace URL").or_else(|| {
                (!pattern(&SLUG_RE, r"^[a-z0-9-]{2,32}$").is_match(&self.slug))
                    .then_some("Only letters, numbers and dashes (2–32 chars)")
            }),
            FormField::Size => (!TEAM_SIZES.contains(&self.size.as_str()))
                .then_some("Please choose a team size"),
            FormField::Industry => (!INDUSTRIES.contains(&self.industry.as_str()))
                .then_some("Please choose an industry"),
            FormField::Email => required(&self.email, "Please enter a billing email").or_else(|| {
                (!pattern(&EMAIL_RE, r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_match(self.email.trim()))
                    .then_some("Please enter a valid email")
            }),
            // Always set: defaults to Pro
            FormField::Plan => None,
            FormField::CardName => required(&self.card_name, "Please enter the cardholder name"),
            FormField::CardNumber => required(&self.card_number, "Please enter a card number")
                .or_else(|| {
                    (!pattern(&CARD_RE, r"^[0-9 ]{12,19}$").is_match(&self.card_number))
                        .then_some("Enter a valid card number")
                }),
            FormField::Expiry => required(&self.expiry, "Please enter an expiry date").or_else(|| {
                (!pattern(&EXPIRY_RE, r"^(0[1-9]|1[0-2])/[0-9]{2}$").is_match(self.expiry.trim()))
                    .then_some("Use MM/YY")
            }),
            FormField::Cvc => (!pattern(&CVC_RE, r"^[0-9]{3}$").is_match(&self.cvc)).then_some("3 digits"),
            FormField::Coupon => None,
            FormField::Accept => (!self.accept).then_some("You must accept the terms"),
        }
    }

    pub fn validate_step(&self, step: Step) -> ValidationErrors {
        ValidationErrors(
            step.fields()
                .iter()
                .filter_map(|f| self.validate_field(*f).map(|msg| (*f, msg)))
                .collect(),
        )
    }
}

/// Field errors of one step, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<(FormField, &'static str)>);

impl ValidationErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| *m)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Workspace URL slug: lower-case, `[a-z0-9]` runs joined by single dashes
pub fn slugify(input: &str) -> String {
    let mut out = String::new();
    let mut pending_dash = false;
    for ch in input.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }
    out.truncate(SLUG_MAX);
    out
}

// ========================
// Form State Machine
// ========================

#[derive(Debug, Clone, Default)]
pub struct OnboardingForm {
    pub values: OnboardingValues,
    step: Step,
    errors: ValidationErrors,
    /// Set once the user types into the slug field directly
    slug_edited: bool,
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Update the organization name; the slug follows until edited by hand
    pub fn set_org(&mut self, org: &str) {
        self.values.org = org.to_string();
        if !self.slug_edited {
            self.values.slug = slugify(org);
        }
    }

    /// Manual slug edit; clearing it hands the slug back to the derived value
    pub fn set_slug(&mut self, slug: &str) {
        self.slug_edited = !slug.is_empty();
        self.values.slug = slug.to_string();
    }

    /// Validate the current step and advance. Returns whether it advanced.
    pub fn next(&mut self) -> bool {
        self.errors = self.values.validate_step(self.step);
        if !self.errors.is_empty() {
            log::debug!("step {:?} blocked by {} errors", self.step, self.errors.len());
            return false;
        }
        self.step = Step::from_index(self.step.index() + 1);
        true
    }

    pub fn back(&mut self) {
        self.errors = ValidationErrors::default();
        self.step = Step::from_index(self.step.index().saturating_sub(1));
    }

    /// Validate every step. On failure the first failing step becomes current.
    pub fn submit(&mut self) -> Result<(), Step> {
        for step in Step::ALL {
            let errors = self.values.validate_step(step);
            if !errors.is_empty() {
                self.step = step;
                self.errors = errors;
                return Err(step);
            }
        }
        self.errors = ValidationErrors::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> OnboardingForm {
        let mut form = OnboardingForm::new();
        form.set_org("Acme Inc.");
        form.values.size = "11–50".to_string();
        form.values.industry = "Technology".to_string();
        form.values.email = "ops@acme.io".to_string();
        form.values.card_name = "Jane Doe".to_string();
        form.values.card_number = "4242 4242 4242 4242".to_string();
        form.values.expiry = "09/28".to_string();
        form.values.cvc = "123".to_string();
        form.values.accept = true;
        form
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Acme Inc."), "acme-inc");
        assert_eq!(slugify("  --Hello,  World!! "), "hello-world");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify(&"a".repeat(40)).len(), 32);
    }

    #[test]
    fn test_slug_follows_org_until_edited() {
        let mut form = OnboardingForm::new();
        form.set_org("A");
        form.set_org("Acme");
        assert_eq!(form.values.slug, "acme");

        form.set_slug("acme-hq");
        form.set_org("Acme Corp");
        assert_eq!(form.values.slug, "acme-hq");

        form.set_slug("");
        form.set_org("Acme Corp");
        assert_eq!(form.values.slug, "acme-corp");
    }

    #[test]
    fn test_next_validates_only_current_step() {
        let mut form = OnboardingForm::new();
        assert!(!form.next());
        assert_eq!(form.step(), Step::Organization);
        assert_eq!(form.errors().get(FormField::Org), Some("Please enter your org name"));
        assert_eq!(form.errors().get(FormField::Email), None);

        form.set_org("Acme");
        form.values.size = "1–10".to_string();
        form.values.industry = "Retail".to_string();
        assert!(form.next());
        assert_eq!(form.step(), Step::Billing);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_back_clamps_at_first_step() {
        let mut form = OnboardingForm::new();
        form.back();
        assert_eq!(form.step(), Step::Organization);
    }

    #[test]
    fn test_submit_jumps_to_first_failing_step() {
        let mut form = filled();
        assert!(form.next());
        assert!(form.next());
        assert_eq!(form.step(), Step::Confirm);

        form.values.email = "not-an-email".to_string();
        assert_eq!(form.submit(), Err(Step::Billing));
        assert_eq!(form.step(), Step::Billing);
        assert_eq!(form.errors().get(FormField::Email), Some("Please enter a valid email"));

        form.values.email = "ops@acme.io".to_string();
        assert_eq!(form.submit(), Ok(()));
    }

    #[test]
    fn test_field_rules() {
        let mut values = filled().values;
        values.org = "A".to_string();
        values.slug = "Bad Slug".to_string();
        values.card_number = "4242".to_string();
        values.expiry = "13/28".to_string();
        values.cvc = "12a".to_string();
        values.accept = false;

        assert_eq!(values.validate_field(FormField::Org), Some("Name is too short"));
        assert!(values.validate_field(FormField::Slug).is_some());
        assert_eq!(values.validate_field(FormField::CardNumber), Some("Enter a valid card number"));
        assert_eq!(values.validate_field(FormField::Expiry), Some("Use MM/YY"));
        assert_eq!(values.validate_field(FormField::Cvc), Some("3 digits"));
        assert_eq!(values.validate_field(FormField::Accept), Some("You must accept the terms"));
        assert_eq!(values.validate_field(FormField::Coupon), None);
    }

    #[test]
    fn test_workspace_url() {
        let form = filled();
        assert_eq!(form.values.workspace_url().as_deref(), Some("teams-hq.io/acme-inc"));
        assert_eq!(OnboardingValues::default().workspace_url(), None);
    }
}
