//! Checkout Page

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use pix_core::{CheckoutView, FormField, FormState, Phase};

use crate::api;
use crate::components::{ErrorBanner, ExpiryNote, FormInput, PaymentFrame, PixCode};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let config = api::config();
    let gateway = api::gateway(&config);
    let notification_url = config.notification_url;

    let form = RwSignal::new(FormState::new());
    let checkout = RwSignal::new(CheckoutView::new());
    let phase = Memo::new(move |_| checkout.with(CheckoutView::phase));

    let submit = {
        let gateway = gateway.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            let snapshot = form.get_untracked();
            let mut request = None;
            checkout.update(|c| request = c.begin_submit(&snapshot, notification_url.as_ref()));
            let Some(request) = request else {
                return;
            };

            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                let result = gateway.create_payment(&request).await;
                checkout.update(|c| c.apply_created(result));
            });
        }
    };

    // Manual only: the page never polls on its own.
    let check = move |_: MouseEvent| {
        let Some(id) = checkout.with_untracked(CheckoutView::pending_payment_id) else {
            return;
        };

        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            let result = gateway.get_payment(id).await;
            let mut notice = None;
            checkout.update(|c| notice = c.apply_status(result));
            if let Some(notice) = notice {
                api::notify(&notice);
            }
        });
    };

    view! {
        <div class="app">
            <header class="app-header">
                <div class="container">
                    <Show when=move || phase.get() == Phase::Collecting>
                        <h1 class="text-center">"PIX donation"</h1>
                    </Show>

                    <ErrorBanner checkout=checkout />

                    {move || match phase.get() {
                        Phase::Collecting => view! {
                            <form on:submit=submit.clone()>
                                {FormField::ALL
                                    .into_iter()
                                    .map(|field| view! { <FormInput field=field form=form /> })
                                    .collect_view()}
                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    disabled=move || checkout.with(CheckoutView::is_submitting)
                                >
                                    "Donate"
                                </button>
                            </form>
                        }
                        .into_any(),

                        Phase::AwaitingApproval => view! {
                            <div>
                                <div class="d-flex justify-content-center mt-3">
                                    <button on:click=check.clone() class="btn btn-primary">
                                        "Check payment status"
                                    </button>
                                </div>
                                <br />
                                <ExpiryNote checkout=checkout />
                                <PixCode checkout=checkout />
                                {move || checkout.with(|c| {
                                    c.ticket_url().map(|url| view! {
                                        <PaymentFrame src=url.to_owned() title="link_buy" />
                                    })
                                })}
                            </div>
                        }
                        .into_any(),

                        Phase::Approved => view! {
                            <div>
                                <h1>"Payment approved"</h1>
                                {move || checkout.with(|c| {
                                    c.status_url().map(|url| view! {
                                        <PaymentFrame src=url.to_owned() title="payment_status" />
                                    })
                                })}
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </header>
        </div>
    }
}
