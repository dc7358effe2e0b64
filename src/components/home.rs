//! Home Component
//!
//! Survey list landing page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use web_sys::console;

use crate::actions;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Home() -> impl IntoView {
    let store = use_app_store();

    // Load the survey list on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(err) = actions::load_surveys(store).await {
                console::error_1(&format!("Failed to load surveys: {err}").into());
            }
        });
    });

    view! {
        <div class="home">
            <h1>"Surveys"</h1>
            <ul class="survey-list">
                <For
                    each=move || store.surveys().get()
                    key=|survey| survey.id
                    children=move |survey| {
                        let href = format!("/surveys/{}", survey.id);
                        view! {
                            <li class="survey-list-row">
                                <A href=href>{survey.name.clone()}</A>
                                <span class="survey-date">{survey.created_at.clone()}</span>
                            </li>
                        }
                    }
                />
            </ul>
            <A href="/surveys">"Create a new survey"</A>
        </div>
    }
}
