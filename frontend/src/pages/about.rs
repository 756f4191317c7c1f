use leptos::*;
use leptos_meta::Title;

const AUDIENCES: [(&str, &str); 3] = [
    ("For Buyers", "Simplified procurement. Just post once. Our BANT-focused system matches you with the right vendors within your budget and timeline."),
    ("For Sales Pros & Consultants", "Transform unused or unconverted leads into economic opportunity. Earn up to 10% commission on verified closures."),
    ("For Sellers & Vendors", "No cold leads. Only intent-driven opportunities structured around serious buying BANT criteria."),
];

const COMMITMENTS: [(&str, &str); 3] = [
    ("One Requirement", "Post once, reach the entire verified market instantly."),
    ("One Platform", "A single point of trust for all IT and software procurement."),
    ("Right Timing", "BANT-driven AI ensures matches happen only when intent is real."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About Us | BantConfirm – India's Smartest B2B Marketplace"/>
        <div class="page about">
            <section class="about-hero">
                <span class="eyebrow">"Our Mission & Philosophy"</span>
                <h1>"Every business requirement has value."</h1>
                <p>
                    "BantConfirm is built on a simple but powerful belief: every genuine business requirement "
                    "has value, even when it goes unused. We are a B2B AI-driven marketplace where the entire "
                    "ecosystem, from buyers to referrers, is rewarded for bringing real intent to the market."
                </p>
                <div class="about-image">
                    <img
                        src="https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&q=80&w=1200"
                        alt="Our Team"
                    />
                    <div class="stat"><strong>"10%"</strong>" Referrer Commission on Closed Deals"</div>
                </div>
            </section>
            <section>
                <h2>"Trust-First B2B Marketplace"</h2>
                <p>
                    "BantConfirm is not a listing website. It is not a lead dump. It is a trust-first ecosystem "
                    "designed to reduce noise, increase conversion, and reward real business value."
                </p>
                <div class="card-row">
                    {AUDIENCES.iter().map(|(title, text)| view! {
                        <div class="card"><h3>{*title}</h3><p>{*text}</p></div>
                    }).collect_view()}
                </div>
            </section>
            <section>
                <h2>"Our Commitment"</h2>
                <div class="card-row">
                    {COMMITMENTS.iter().map(|(title, text)| view! {
                        <div class="card"><h4>{*title}</h4><p>{*text}</p></div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
