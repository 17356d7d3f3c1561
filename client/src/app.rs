//! Root application component, page shell, and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::submit::SubmitPage;
use crate::settings::FormSettings;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `settings` are provided as context for the server render and written into
/// `<meta>` tags so the browser picks up the same values when it hydrates.
pub fn shell(options: LeptosOptions, settings: FormSettings) -> impl IntoView {
    let meta = settings.meta_entries();
    provide_context(settings);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {meta
                    .into_iter()
                    .map(|(name, content)| view! { <meta name=name content=content/> })
                    .collect_view()}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = use_context::<FormSettings>().unwrap_or_else(FormSettings::from_document);

    view! {
        <Stylesheet id="leptos" href="/pkg/taudelta.css"/>
        <Title text="Insert Tau and Delta"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=move || view! { <SubmitPage settings=settings.clone()/> }
                />
            </Routes>
        </Router>
    }
}
