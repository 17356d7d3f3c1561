//! The single page of the app: heading plus the tau/delta form.

use leptos::prelude::*;

use crate::components::tau_delta_form::TauDeltaForm;
use crate::settings::FormSettings;

#[component]
pub fn SubmitPage(settings: FormSettings) -> impl IntoView {
    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Insert Tau and Delta"</h1>
            </header>
            <TauDeltaForm settings=settings/>
        </div>
    }
}
