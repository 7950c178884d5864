//! Email and phone lines next to the logo

use leptos::prelude::*;
use pksite_core::icons;
use pksite_types::ContactConfig;

use super::SvgIcon;

/// Contact details; hidden on narrow screens by the stylesheet
#[component]
pub fn ContactDetails(contact: ContactConfig) -> impl IntoView {
    let email_href = contact.email_href();
    let phone_href = contact.phone_href();

    view! {
        <div class="pk-contact">
            <a class="pk-contact-line" href=email_href>
                <SvgIcon icon=icons::MAIL />
                <span>{contact.email}</span>
            </a>
            <a class="pk-contact-line" href=phone_href>
                <SvgIcon icon=icons::PHONE />
                <span>{contact.phone}</span>
            </a>
        </div>
    }
}
