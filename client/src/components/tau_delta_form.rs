//! Member/consumer selection and tau/delta submission form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form owns one `FormController` signal. The member list is fetched once
//! after hydration; the form stays usable while it is in flight. Submissions
//! are validated by the controller before anything is sent, and every
//! outcome lands back on the controller for `StatusLine` to render.

#[cfg(test)]
#[path = "tau_delta_form_test.rs"]
mod tau_delta_form_test;

use form::{FormController, ValidationError};
use leptos::prelude::*;

use crate::components::status_line::StatusLine;
use crate::settings::FormSettings;

/// Owned option labels for a `<select>`.
pub(crate) fn option_labels<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    items.into_iter().map(ToOwned::to_owned).collect()
}

/// `min` attribute value for the delta input.
pub(crate) fn delta_min_attr(controller: &FormController) -> Option<String> {
    controller.delta_min_hint().map(|min| min.to_string())
}

fn log_rejection(error: &ValidationError) {
    #[cfg(feature = "hydrate")]
    log::warn!("submission rejected: {error}");
    #[cfg(not(feature = "hydrate"))]
    let _ = error;
}

/// Tau/delta form bound to the backend described by `settings`.
#[component]
pub fn TauDeltaForm(settings: FormSettings) -> impl IntoView {
    let controller = RwSignal::new(FormController::new(settings.policy));
    let backend = StoredValue::new(settings.backend);

    // Effects only run in the browser, so the fetch starts after hydration.
    Effect::new(move || {
        if !controller.try_update(FormController::begin_members_fetch).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let backend = backend.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_members(&backend).await;
                match &result {
                    Ok(members) => log::info!("members fetched: {} members", members.len()),
                    Err(e) => log::error!("error fetching members: {e}"),
                }
                controller.update(|c| c.members_loaded(result));
            });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(outcome) = controller.try_update(FormController::begin_submit) else {
            return;
        };
        let (ticket, request) = match outcome {
            Ok(pending) => pending,
            Err(error) => {
                log_rejection(&error);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let backend = backend.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_tau_delta(&backend, &request).await;
                match &result {
                    Ok(ack) => log::info!("submission accepted: {}", ack.body()),
                    Err(e) => log::error!("submission failed: {e}"),
                }
                controller.update(|c| {
                    if !c.finish_submit(ticket, result) {
                        log::debug!("dropped result of superseded submission");
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, request, backend);
    };

    let member_options = move || controller.with(|c| option_labels(c.member_options()));
    let consumer_options = move || controller.with(|c| option_labels(c.consumer_options().iter().map(String::as_str)));

    view! {
        <form class="tau-delta-form" on:submit=on_submit>
            <div class="form-group">
                <label for="member-select" class="form-label">"Member:"</label>
                <select
                    id="member-select"
                    class="form-control"
                    prop:value=move || controller.with(|c| c.form().selected_member.clone())
                    on:change=move |ev| {
                        let member = event_target_value(&ev);
                        controller.update(|c| c.select_member(member));
                    }
                >
                    <option value="">"Select a member"</option>
                    {move || {
                        member_options()
                            .into_iter()
                            .map(|member| view! { <option value=member.clone()>{member.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="form-group">
                <label for="consumer-select" class="form-label">"Consumer:"</label>
                <select
                    id="consumer-select"
                    class="form-control"
                    disabled=move || !controller.with(FormController::consumer_enabled)
                    prop:value=move || controller.with(|c| c.form().selected_consumer.clone())
                    on:change=move |ev| {
                        let consumer = event_target_value(&ev);
                        controller.update(|c| c.select_consumer(consumer));
                    }
                >
                    <option value="">"Select a consumer"</option>
                    {move || {
                        consumer_options()
                            .into_iter()
                            .map(|consumer| view! { <option value=consumer.clone()>{consumer.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="form-group">
                <label for="tau-input" class="form-label">"Tau:"</label>
                <input
                    id="tau-input"
                    type="number"
                    class="form-control"
                    required=true
                    prop:value=move || controller.with(|c| c.form().tau.clone())
                    on:input=move |ev| {
                        let tau = event_target_value(&ev);
                        controller.update(|c| c.set_tau(tau));
                    }
                />
            </div>
            <div class="form-group">
                <label for="delta-input" class="form-label">"Delta:"</label>
                <input
                    id="delta-input"
                    type="number"
                    class="form-control"
                    required=true
                    min=move || controller.with(delta_min_attr)
                    prop:value=move || controller.with(|c| c.form().delta.clone())
                    on:input=move |ev| {
                        let delta = event_target_value(&ev);
                        controller.update(|c| c.set_delta(delta));
                    }
                />
            </div>
            <button type="submit" class="btn btn-primary">
                "Submit"
            </button>
            <StatusLine controller=controller/>
        </form>
    }
}
