//! Static terms and privacy pages.

#[cfg(test)]
#[path = "legal_test.rs"]
mod legal_test;

use leptos::prelude::*;

pub type LegalSection = (&'static str, &'static str);

pub const TERMS_SECTIONS: [LegalSection; 3] = [
    (
        "1. Acceptance of Terms",
        "By accessing and using FreshTrack, you accept and agree to be bound by the terms and provision of this agreement.",
    ),
    (
        "2. Use License",
        "Permission is granted to temporarily use FreshTrack for personal, non-commercial transitory viewing only.",
    ),
    (
        "3. Disclaimer",
        "The materials on FreshTrack are provided on an 'as is' basis. FreshTrack makes no warranties, expressed or \
         implied, and hereby disclaims and negates all other warranties.",
    ),
];

pub const PRIVACY_SECTIONS: [LegalSection; 4] = [
    (
        "1. Information We Collect",
        "We collect information that you provide directly to us, including your name, email address, and company \
         information when you register for an account.",
    ),
    (
        "2. How We Use Your Information",
        "We use the information we collect to provide, maintain, and improve our services, process transactions, and \
         send you technical notices.",
    ),
    (
        "3. Information Sharing",
        "We do not sell, trade, or otherwise transfer your personal information to third parties without your consent, \
         except as described in this policy.",
    ),
    (
        "4. Data Security",
        "We implement appropriate security measures to protect your personal information against unauthorized access, \
         alteration, disclosure, or destruction.",
    ),
];

#[component]
fn LegalPage(title: &'static str, sections: &'static [LegalSection]) -> impl IntoView {
    let sections = sections
        .iter()
        .map(|(heading, body)| {
            view! {
                <section class="legal-page__section">
                    <h2>{*heading}</h2>
                    <p>{*body}</p>
                </section>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="legal-page">
            <a class="detail-page__back" href="/profile">"Back"</a>
            <h1>{title}</h1>
            {sections}
        </div>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalPage title="Terms and Conditions" sections=&TERMS_SECTIONS/> }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalPage title="Privacy Policy" sections=&PRIVACY_SECTIONS/> }
}
