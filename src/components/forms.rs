//! Onboarding Form Page
//!
//! Three-step workspace signup with per-step validation and a live summary.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use showcase_core::onboarding::{FormField, OnboardingValues, INDUSTRIES, TEAM_SIZES};
use showcase_core::{OnboardingForm, Plan, Step};

use crate::context::use_app_context;

/// Error text under a field, linked through `aria-describedby`
fn field_error(form: RwSignal<OnboardingForm>, field: FormField, id: String) -> impl IntoView {
    view! {
        <p class="field-error" id=id role="alert">
            {move || form.with(|f| f.errors().get(field))}
        </p>
    }
}

fn text_field(
    form: RwSignal<OnboardingForm>,
    field: FormField,
    id: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    read: fn(&OnboardingValues) -> String,
    write: fn(&mut OnboardingForm, String),
) -> impl IntoView {
    let error_id = format!("{}-error", id);
    let invalid = move || form.with(|f| f.errors().get(field).is_some());

    view! {
        <div class="field">
            <label for=id>{field.label()}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                aria-invalid=move || invalid().to_string()
                aria-describedby=error_id.clone()
                prop:value=move || form.with(|f| read(&f.values))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| write(f, value));
                }
            />
            {field_error(form, field, error_id)}
        </div>
    }
}

fn select_field(
    form: RwSignal<OnboardingForm>,
    field: FormField,
    id: &'static str,
    options: &'static [&'static str],
    read: fn(&OnboardingValues) -> String,
    write: fn(&mut OnboardingValues, String),
) -> impl IntoView {
    let error_id = format!("{}-error", id);

    view! {
        <div class="field">
            <label for=id>{field.label()}</label>
            <select
                id=id
                aria-describedby=error_id.clone()
                prop:value=move || form.with(|f| read(&f.values))
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| write(&mut f.values, value));
                }
            >
                <option value="" disabled=true>"Choose…"</option>
                {options.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect_view()}
            </select>
            {field_error(form, field, error_id)}
        </div>
    }
}

#[component]
fn OrganizationStep(form: RwSignal<OnboardingForm>) -> impl IntoView {
    view! {
        <fieldset>
            <legend>"Organization"</legend>
            {text_field(form, FormField::Org, "org", "text", "Acme Inc.",
                |v| v.org.clone(), |f, s| f.set_org(&s))}
            {text_field(form, FormField::Slug, "slug", "text", "acme",
                |v| v.slug.clone(), |f, s| f.set_slug(&s))}
            <p class="muted small">
                {move || form.with(|f| f.values.workspace_url()).unwrap_or_else(|| "teams-hq.io/…".to_string())}
            </p>
            {select_field(form, FormField::Size, "size", &TEAM_SIZES,
                |v| v.size.clone(), |v, s| v.size = s)}
            {select_field(form, FormField::Industry, "industry", &INDUSTRIES,
                |v| v.industry.clone(), |v, s| v.industry = s)}
        </fieldset>
    }
}

#[component]
fn BillingStep(form: RwSignal<OnboardingForm>) -> impl IntoView {
    view! {
        <fieldset>
            <legend>"Billing"</legend>
            {text_field(form, FormField::Email, "email", "email", "billing@acme.io",
                |v| v.email.clone(), |f, s| f.values.email = s)}
            <div class="plan-grid" role="radiogroup" aria-label="Plan">
                {Plan::ALL
                    .into_iter()
                    .map(|plan| {
                        let copy = plan.copy();
                        let checked = move || form.with(|f| f.values.plan == plan);
                        view! {
                            <label class=move || if checked() { "card plan active" } else { "card plan" }>
                                <input
                                    type="radio"
                                    name="plan"
                                    prop:checked=checked
                                    on:change=move |_| form.update(|f| f.values.plan = plan)
                                />
                                <strong>{copy.title}</strong>
                                <span class="price">{copy.price}</span>
                                <ul>
                                    {copy.perks.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                                </ul>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            {text_field(form, FormField::CardName, "card-name", "text", "Jane Doe",
                |v| v.card_name.clone(), |f, s| f.values.card_name = s)}
            {text_field(form, FormField::CardNumber, "card-number", "text", "4242 4242 4242 4242",
                |v| v.card_number.clone(), |f, s| f.values.card_number = s)}
            <div class="field-row">
                {text_field(form, FormField::Expiry, "expiry", "text", "MM/YY",
                    |v| v.expiry.clone(), |f, s| f.values.expiry = s)}
                {text_field(form, FormField::Cvc, "cvc", "text", "123",
                    |v| v.cvc.clone(), |f, s| f.values.cvc = s)}
            </div>
            {text_field(form, FormField::Coupon, "coupon", "text", "WELCOME10",
                |v| v.coupon.clone(), |f, s| f.values.coupon = s)}
        </fieldset>
    }
}

#[component]
fn ConfirmStep(form: RwSignal<OnboardingForm>) -> impl IntoView {
    let row = move |label: &'static str, read: fn(&OnboardingValues) -> String| {
        view! {
            <div class="summary-row">
                <dt>{label}</dt>
                <dd>{move || form.with(|f| read(&f.values))}</dd>
            </div>
        }
    };

    view! {
        <fieldset>
            <legend>"Confirm"</legend>
            <dl class="summary">
                {row("Organization", |v| v.org.clone())}
                {row("Workspace", |v| v.workspace_url().unwrap_or_default())}
                {row("Team size", |v| v.size.clone())}
                {row("Industry", |v| v.industry.clone())}
                {row("Billing email", |v| v.email.clone())}
                {row("Plan", |v| {
                    let copy = v.plan.copy();
                    format!("{} ({})", copy.title, copy.price)
                })}
                {row("Card", |v| {
                    let digits: String = v.card_number.chars().filter(|c| c.is_ascii_digit()).collect();
                    let last4 = &digits[digits.len().saturating_sub(4)..];
                    format!("•••• {}", last4)
                })}
            </dl>
            <ul class="perks">
                {move || {
                    form.with(|f| f.values.plan.copy().perks)
                        .iter()
                        .map(|p| view! { <li>{*p}</li> })
                        .collect_view()
                }}
            </ul>
            <label class="switch">
                <input
                    type="checkbox"
                    aria-describedby="accept-error"
                    prop:checked=move || form.with(|f| f.values.accept)
                    on:change=move |ev| form.update(|f| f.values.accept = event_target_checked(&ev))
                />
                "I accept the terms of service"
            </label>
            {field_error(form, FormField::Accept, "accept-error".to_string())}
        </fieldset>
    }
}

#[component]
pub fn FormsPage() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(OnboardingForm::new());
    let submitting = RwSignal::new(false);
    let done = RwSignal::new(false);
    let step = move || form.with(|f| f.step());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if step() != Step::Confirm {
            form.update(|f| {
                f.next();
            });
            return;
        }
        let mut valid = false;
        form.update(|f| valid = f.submit().is_ok());
        if !valid {
            ctx.notify("Please fix the highlighted fields");
            return;
        }
        submitting.set(true);
        let latency = ctx.latency_ms;
        spawn_local(async move {
            TimeoutFuture::new(latency).await;
            let url = form.with_untracked(|f| f.values.workspace_url().unwrap_or_default());
            log::info!("workspace created: {}", url);
            submitting.set(false);
            done.set(true);
        });
    };

    let reset = move |_| {
        form.set(OnboardingForm::new());
        done.set(false);
    };

    view! {
        <div class="page-head">
            <div>
                <h1>"Forms"</h1>
                <p class="muted">"Multi-step, validation, async UX."</p>
            </div>
        </div>

        <Show
            when=move || !done.get()
            fallback=move || {
                view! {
                    <div class="card success" role="status">
                        <h2>"Workspace ready"</h2>
                        <p>{move || form.with(|f| f.values.workspace_url().unwrap_or_default())}</p>
                        <button class="btn" on:click=reset>"Start over"</button>
                    </div>
                }
            }
        >
            <ol class="steps" aria-label="Progress">
                {Step::ALL
                    .into_iter()
                    .map(|s| {
                        view! {
                            <li
                                class=move || {
                                    if step() == s { "step current" } else if step() > s { "step done" } else { "step" }
                                }
                                aria-current=move || (step() == s).then_some("step")
                            >
                                {format!("{}. {}", s.index() + 1, s.title())}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <form class="card onboarding" novalidate=true on:submit=submit>
                {move || match step() {
                    Step::Organization => view! { <OrganizationStep form=form /> }.into_any(),
                    Step::Billing => view! { <BillingStep form=form /> }.into_any(),
                    Step::Confirm => view! { <ConfirmStep form=form /> }.into_any(),
                }}
                <div class="actions">
                    <button
                        type="button"
                        class="btn"
                        disabled=move || step() == Step::Organization
                        on:click=move |_| form.update(|f| f.back())
                    >
                        "Back"
                    </button>
                    <button type="submit" class="btn primary" disabled=move || submitting.get()>
                        {move || match (step(), submitting.get()) {
                            (_, true) => "Creating workspace…",
                            (Step::Confirm, false) => "Create workspace",
                            _ => "Next",
                        }}
                    </button>
                </div>
            </form>
        </Show>
    }
}
