//! Survey Component
//!
//! Detail view: loads a survey by route id, records choice selections,
//! submits the response.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use web_sys::console;

use crate::actions;
use crate::store::{store_set_choice, use_app_store, AppStateStoreFields};

#[component]
pub fn SurveyView() -> impl IntoView {
    let store = use_app_store();
    let params = use_params_map();
    let (submitted, set_submitted) = signal(false);

    // Load the survey whenever the route id changes
    Effect::new(move |_| {
        let Some(id) = params.read().get("id").and_then(|raw| raw.parse::<u32>().ok()) else {
            return;
        };
        spawn_local(async move {
            if let Err(err) = actions::load_survey(store, id).await {
                console::error_1(&format!("Failed to load survey {id}: {err}").into());
            }
        });
    });

    let on_submit = move |_| {
        spawn_local(async move {
            match actions::add_survey_response(store).await {
                Ok(()) => set_submitted.set(true),
                Err(err) => {
                    console::error_1(&format!("Failed to submit response: {err}").into());
                }
            }
        });
    };

    view! {
        <div class="survey">
            {move || match store.current_survey().get() {
                Some(survey) => view! {
                    <h1>{survey.name.clone()}</h1>
                    <div class="questions">
                        {survey.questions.iter().map(|question| {
                            let question_id = question.id;
                            let selected = question.choice;
                            view! {
                                <section class="question">
                                    <h2>{question.text.clone()}</h2>
                                    <div class="choices">
                                        {question.choices.iter().map(|choice| {
                                            let choice_id = choice.id;
                                            let class = if selected == Some(choice_id) {
                                                "choice-btn active"
                                            } else {
                                                "choice-btn"
                                            };
                                            let text = choice.text.clone();
                                            view! {
                                                <button
                                                    type="button"
                                                    class=class
                                                    on:click=move |_| store_set_choice(&store, question_id, choice_id)
                                                >
                                                    {text}
                                                </button>
                                            }
                                        }).collect_view()}
                                    </div>
                                </section>
                            }
                        }).collect_view()}
                    </div>
                    {if submitted.get() {
                        view! { <p class="submit-done">"Thanks for taking the survey!"</p> }.into_any()
                    } else {
                        view! {
                            <button class="submit-btn" on:click=on_submit>"Submit response"</button>
                        }.into_any()
                    }}
                }.into_any(),
                None => view! { <p>"Loading survey..."</p> }.into_any(),
            }}
        </div>
    }
}
