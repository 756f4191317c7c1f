//! Help center accordion, one answer open at a time.

use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

use crate::components::{ConsultBox, PageHeading};

const FAQS: [(&str, &str); 6] = [
    (
        "What is the BantConfirm philosophy?",
        "Our philosophy is built on the belief that every genuine business requirement has value, even when it goes unused. We aim to reduce noise in the B2B market by ensuring every post represents real intent (BANT) and rewarding those who bring such value to the marketplace.",
    ),
    (
        "Can I earn commission by posting requirements?",
        "Yes. If you are a sales professional, consultant, or business owner with a verified business requirement that you cannot fulfill, you can post it on BantConfirm. For every successfully closed deal through your referral, you can earn up to 10% commission.",
    ),
    (
        "How is BantConfirm different from a 'lead dump' website?",
        "BantConfirm is not a directory or a listing site. Every requirement is structured around BANT (Budget, Authority, Need, Timing). Our AI analyzes intent scores to ensure vendors receive high-conversion opportunities, not just bulk contact lists.",
    ),
    (
        "How does the BANT matching benefit buyers?",
        "Buyers save time and money. Instead of juggling multiple mismatched proposals, you post your requirement once. Our system filters for vendors who strictly meet your specific budget, technical need, and timeline, simplifying your selection process.",
    ),
    (
        "Is there a fee for posting an enquiry?",
        "No, posting an enquiry as a buyer is completely free. We monetize through vendor success fees and premium services, ensuring our interests are aligned with yours.",
    ),
    (
        "Does BantConfirm sell my data?",
        "No. We have a strict 'No Data Selling' policy. Your data is only shared with the specific vendors matched to your requirement through the BANT verification process.",
    ),
];

/// Clicking the open question closes it, any other opens that one.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
pub fn FaqPage() -> impl IntoView {
    let open = create_rw_signal(Some(0usize));

    view! {
        <Title text="FAQ | BantConfirm B2B Marketplace Help Center"/>
        <div class="page faq">
            <PageHeading
                tag="Help Center"
                title="Frequently Asked Questions"
                subtitle="Everything you need to know about the BantConfirm ecosystem."
            />
            <div class="accordion">
                {FAQS.iter().enumerate().map(|(idx, (question, answer))| {
                    let is_open = move || open.get() == Some(idx);
                    view! {
                        <div class="accordion-item" class:open=is_open>
                            <button class="accordion-question" on:click=move |_| open.update(|o| *o = toggle(*o, idx))>
                                <span>{*question}</span>
                                <span class="chevron">"▾"</span>
                            </button>
                            <Show when=is_open fallback=|| ()>
                                <p class="accordion-answer">{*answer}</p>
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </div>
            <ConsultBox/>
            <div class="cta-panel">
                <h3>"Ready to unlock business value?"</h3>
                <p>"Whether you're a buyer, seller, or consultant, BantConfirm is built for you."</p>
                <A href="/lead-wizard" class="btn btn-light">"Post Requirement"</A>
                <A href="/products" class="btn btn-primary">"Browse Catalog"</A>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_toggle() {
        assert_eq!(toggle(Some(0), 0), None);
        assert_eq!(toggle(Some(0), 2), Some(2));
        assert_eq!(toggle(None, 1), Some(1));
    }
}
