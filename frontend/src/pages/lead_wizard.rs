//! Three-step requirement wizard with the AI verdict card.

use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

use crate::components::PageHeading;
use crate::services::api;
use crate::state::use_app_state;
use crate::types::{LeadDraft, Submission};

const AUTHORITY_OPTIONS: [(&str, &str); 4] = [
    ("Not Provided", "Select Role"),
    ("Decider", "Final Decision Maker"),
    ("Evaluator", "Technical Evaluator"),
    ("Researcher", "Researcher / Manager"),
];

const TIMELINE_OPTIONS: [&str; 4] = ["Immediate", "1 Month", "1-3 Months", "Exploring"];

/// Steps 1 to 3 are the form, 4 is the result card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Contact = 1,
    Requirement = 2,
    Context = 3,
    Complete = 4,
}

impl Step {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Self {
        match self {
            Self::Contact => Self::Requirement,
            Self::Requirement => Self::Context,
            Self::Context | Self::Complete => Self::Complete,
        }
    }

    pub fn back(self) -> Self {
        match self {
            Self::Contact | Self::Requirement => Self::Contact,
            Self::Context => Self::Requirement,
            Self::Complete => Self::Context,
        }
    }
}

/// Text input bound to one field of the draft.
fn field(
    form: RwSignal<LeadDraft>,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    get: fn(&LeadDraft) -> String,
    set: fn(&mut LeadDraft, String),
) -> impl IntoView {
    view! {
        <div class="field">
            <label>{label}</label>
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn LeadWizardPage() -> impl IntoView {
    let state = use_app_state();
    let step = create_rw_signal(Step::Contact);
    let form = create_rw_signal(LeadDraft::default());
    let result = create_rw_signal(None::<Submission>);
    let (error, set_error) = create_signal(None::<String>);
    let navigate = use_navigate();

    // Prefill contact details from the signed-in user
    create_effect(move |_| {
        if let Some(user) = state.user.get() {
            form.update(|f| f.prefill(&user));
        }
    });

    let submit = create_action(move |draft: &LeadDraft| {
        let draft = draft.clone();
        async move {
            match api::submit_lead(&draft).await {
                Ok(submission) => {
                    result.set(Some(submission));
                    step.set(Step::Complete);
                }
                Err(e) => {
                    log::error!("❌ Lead submission failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        }
    });

    let on_confirm = move |_| {
        let draft = form.get_untracked();
        if !draft.is_complete() {
            set_error.set(Some(
                "Please provide your contact details and requirement summary.".to_string(),
            ));
            step.set(Step::Contact);
            return;
        }
        set_error.set(None);
        submit.dispatch(draft);
    };

    let next = move |_| step.update(|s| *s = s.next());
    let back = move |_| step.update(|s| *s = s.back());

    let stepper = move || {
        (1..=3u8)
            .map(|i| view! {
                <div class="step-dot" class:done=move || { step.get().number() >= i }>{i}</div>
            })
            .collect_view()
    };

    view! {
        <Title text="Post Requirement | BantConfirm"/>
        <div class="page wizard">
            <PageHeading
                tag="AI Sourcing Intelligence"
                title="Post Your B2B Requirement"
                subtitle="Verified intent analysis powered by BANT methodology."
            />
            <Show when=move || step.get() != Step::Complete fallback=|| ()>
                <div class="stepper">{stepper}</div>
            </Show>
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="wizard-card">
                {move || match step.get() {
                    Step::Contact => view! {
                        <h2>"Verification Details"</h2>
                        <div class="form-grid">
                            {field(form, "Lead Contact Name", "text", "Rahul Sharma", |f| f.name.clone(), |f, v| f.name = v)}
                            {field(form, "Business Email", "email", "rahul@company.in", |f| f.email.clone(), |f, v| f.email = v)}
                            {field(form, "Mobile Contact", "tel", "91XXXXXXXX", |f| f.mobile.clone(), |f, v| f.mobile = v)}
                            {field(form, "Operating Location", "text", "Noida, UP", |f| f.location.clone(), |f, v| f.location = v)}
                            {field(form, "Company / Organization", "text", "e.g. Acme Tech", |f| f.company_name.clone(), |f, v| f.company_name = v)}
                        </div>
                        <button class="btn btn-primary wide" on:click=next>"Continue"</button>
                    }.into_view(),
                    Step::Requirement => view! {
                        <h2>"BANT Analysis Parameters"</h2>
                        <div class="field">
                            <label>"Describe the Exact Solution Required"</label>
                            <textarea
                                rows="4"
                                placeholder="e.g. Cloud telephony for a 30-seat support team"
                                prop:value=move || form.with(|f| f.need.clone())
                                on:input=move |ev| form.update(|f| f.need = event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="form-grid">
                            {field(form, "Estimated Budget (Optional)", "text", "e.g. 2-5 Lakhs", |f| f.budget.clone(), |f, v| f.budget = v)}
                            <div class="field">
                                <label>"Decision Authority"</label>
                                <select
                                    prop:value=move || form.with(|f| f.authority.clone())
                                    on:change=move |ev| form.update(|f| f.authority = event_target_value(&ev))
                                >
                                    {AUTHORITY_OPTIONS.iter().map(|(value, label)| view! {
                                        <option value=*value>{*label}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                        </div>
                        <div class="wizard-actions">
                            <button class="btn btn-secondary" on:click=back>"Back"</button>
                            <button class="btn btn-primary" on:click=next>"Finalize"</button>
                        </div>
                    }.into_view(),
                    Step::Context => view! {
                        <h2>"Final Sourcing Context"</h2>
                        <label>"Implementation Timeline"</label>
                        <div class="choice-row">
                            {TIMELINE_OPTIONS.iter().map(|time| view! {
                                <button
                                    class="choice"
                                    class:active=move || form.with(|f| f.timeline == *time)
                                    on:click=move |_| form.update(|f| f.timeline = time.to_string())
                                >
                                    {*time}
                                </button>
                            }).collect_view()}
                        </div>
                        <p class="hint">
                            "Our AI will audit your requirement against BANT criteria and match you with audited vendors."
                        </p>
                        <div class="wizard-actions">
                            <button class="btn btn-secondary" on:click=back>"Back"</button>
                            <button class="btn btn-primary" on:click=on_confirm disabled=move || submit.pending().get()>
                                {move || if submit.pending().get() { "ANALYZING..." } else { "CONFIRM REQUIREMENT" }}
                            </button>
                        </div>
                    }.into_view(),
                    Step::Complete => {
                        let navigate = navigate.clone();
                        result.get().map(|submission| view! {
                            <div class="result-card">
                                <div class="result-icon">"✓"</div>
                                <h2>"Record Created"</h2>
                                <p class="score">"Intent Score: " {submission.analysis.intent_score} "/100"</p>
                                <div class="audit">
                                    <h4>"Admin Audit"</h4>
                                    <p>"\"" {submission.analysis.summary.clone()} "\""</p>
                                </div>
                                <div class="wizard-actions">
                                    <A href="/products" class="btn btn-secondary">"Browse Solutions"</A>
                                    <button class="btn btn-primary" on:click=move |_| navigate("/", Default::default())>
                                        "Back to Home"
                                    </button>
                                </div>
                            </div>
                        }).into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        assert_eq!(Step::Contact.next(), Step::Requirement);
        assert_eq!(Step::Context.next(), Step::Complete);
        assert_eq!(Step::Complete.next(), Step::Complete);
        assert_eq!(Step::Contact.back(), Step::Contact);
        assert_eq!(Step::Context.back(), Step::Requirement);
        assert_eq!(Step::Requirement.number(), 2);
    }
}
