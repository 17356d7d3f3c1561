//! Runtime settings handed from the host to the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host reads its configuration from the environment and renders it into
//! `<meta>` tags of the page shell. During SSR the settings are also provided
//! as context; after hydration the browser reads the tags back, so both sides
//! render the same form.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use form::{Backend, DeltaGap, NumberParsing, SubmitPolicy};

pub const META_BACKEND_URL: &str = "taudelta-backend-url";
pub const META_NUMBER_PARSING: &str = "taudelta-number-parsing";
pub const META_DELTA_GAP: &str = "taudelta-delta-gap";

/// Backend location and submit policy for one page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSettings {
    pub backend: Backend,
    pub policy: SubmitPolicy,
}

impl FormSettings {
    /// `(name, content)` pairs for the shell's `<meta>` tags.
    #[must_use]
    pub fn meta_entries(&self) -> [(&'static str, String); 3] {
        [
            (META_BACKEND_URL, self.backend.base_url().to_owned()),
            (META_NUMBER_PARSING, self.policy.numbers.to_string()),
            (META_DELTA_GAP, self.policy.delta_gap.to_string()),
        ]
    }

    /// Rebuild settings from meta tag contents; missing or unknown values
    /// fall back to defaults.
    pub fn from_meta(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend = lookup(META_BACKEND_URL).map(|raw| Backend::new(&raw)).unwrap_or_default();
        let numbers = lookup(META_NUMBER_PARSING)
            .and_then(|raw| raw.parse::<NumberParsing>().ok())
            .unwrap_or_default();
        let delta_gap = lookup(META_DELTA_GAP)
            .and_then(|raw| raw.parse::<DeltaGap>().ok())
            .unwrap_or_default();
        Self { backend, policy: SubmitPolicy { numbers, delta_gap } }
    }

    /// Read settings from the current document's meta tags.
    /// Outside the browser this yields the defaults.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let document = web_sys::window().and_then(|window| window.document());
            Self::from_meta(|name| {
                document
                    .as_ref()?
                    .query_selector(&format!("meta[name=\"{name}\"]"))
                    .ok()
                    .flatten()?
                    .get_attribute("content")
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
