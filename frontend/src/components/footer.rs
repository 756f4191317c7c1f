//! Footer component

use chrono::Datelike;
use leptos::*;
use leptos_router::*;

use crate::components::Brand;
use crate::state::use_app_state;

const FOOTER_GROUPS: [(&str, [&str; 4]); 3] = [
    ("Solutions", ["Tally Software", "HRMS Solutions", "Inventory Management", "Billing Software"]),
    ("Telecom", ["Toll-Free Numbers", "Internet Leased Line", "Networking Security", "AI Voice Agents"]),
    ("Near You", ["Vendors in Delhi", "IT Mumbai", "CRM Bangalore", "ERP Chennai"]),
];

const COMPANY_LINKS: [(&str, &str); 4] = [
    ("About Us", "/about"),
    ("FAQ", "/faq"),
    ("Blog & Insights", "/blog"),
    ("Become a Vendor", "/vendor-registration"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let settings = use_app_state().settings;
    let year = chrono::Local::now().year();

    view! {
        <footer class="site-footer">
            <div class="footer-groups">
                {FOOTER_GROUPS.iter().map(|(title, links)| view! {
                    <div class="footer-group">
                        <h4>{*title}</h4>
                        <ul>
                            {links.iter().map(|link| view! {
                                <li><A href="/products" class="footer-link">{*link}</A></li>
                            }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
                <div class="footer-group">
                    <h4>"Company"</h4>
                    <ul>
                        {COMPANY_LINKS.iter().map(|(name, path)| view! {
                            <li><A href=*path class="footer-link">{*name}</A></li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <div class="footer-contact">
                    <A href="/" class="logo"><Brand/></A>
                    <p>"support@bantconfirm.com"</p>
                    <p>"Noida, UP, India"</p>
                </div>
                <div class="footer-social">
                    {move || settings.get().social_links.entries().into_iter().map(|(platform, href)| view! {
                        <a href=href class="social-link" target="_blank" rel="noopener noreferrer" title=platform>
                            {platform.chars().next().map(|c| c.to_ascii_uppercase().to_string()).unwrap_or_default()}
                        </a>
                    }).collect_view()}
                </div>
            </div>
            <div class="footer-copy">
                {format!("Copyright © {} BantConfirm • Powered by ", year)}
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
        </footer>
    }
}
