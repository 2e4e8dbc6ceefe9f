//! UI Components

use leptos::prelude::*;
use pix_core::{CheckoutView, FormField, FormState};

/// One labelled form input bound to a field of the form state
#[component]
pub fn FormInput(field: FormField, form: RwSignal<FormState>) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label for=field.name() class="form-label">{field.label()}</label>
            <input
                id=field.name()
                name=field.name()
                type=field.input_type()
                pattern=field.pattern()
                title=field.title()
                class="form-control"
                required=true
                prop:value=move || form.with(|f| f.get(field).to_owned())
                on:input=move |ev| form.update(|f| f.update_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

/// Inline error slot, shown in every phase
#[component]
pub fn ErrorBanner(checkout: RwSignal<CheckoutView>) -> impl IntoView {
    move || {
        checkout.with(|c| {
            c.error()
                .map(|message| view! { <p class="error">{message.to_owned()}</p> })
        })
    }
}

/// Externally hosted payment page
#[component]
pub fn PaymentFrame(src: String, title: &'static str) -> impl IntoView {
    view! {
        <iframe src=src width="400px" height="620px" title=title></iframe>
    }
}

/// Copy-and-paste code for banking apps that cannot scan the ticket page
#[component]
pub fn PixCode(checkout: RwSignal<CheckoutView>) -> impl IntoView {
    move || {
        checkout.with(|c| {
            c.pix_code().map(|code| {
                view! {
                    <div class="pix-code mb-3">
                        <label for="pix_code" class="form-label">"PIX copy and paste"</label>
                        <input id="pix_code" class="form-control" readonly=true value=code.to_owned() />
                    </div>
                }
            })
        })
    }
}

/// When the pending PIX charge stops accepting payment
#[component]
pub fn ExpiryNote(checkout: RwSignal<CheckoutView>) -> impl IntoView {
    move || {
        checkout.with(|c| {
            c.payment()
                .and_then(|p| p.date_of_expiration)
                .map(|expiry| {
                    let text = format!("Pay before {}", expiry.format("%d/%m/%Y %H:%M"));
                    view! { <p class="expiry text-center">{text}</p> }
                })
        })
    }
}
