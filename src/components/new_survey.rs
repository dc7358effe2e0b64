//! New Survey Component
//!
//! Authenticated survey-builder form. Questions are drafted one at a
//! time: collect choices, add the question, repeat, then submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use web_sys::console;

use crate::actions;
use crate::models::{NewChoice, NewQuestion, NewSurvey};
use crate::store::use_app_store;

#[component]
pub fn NewSurveyForm() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (questions, set_questions) = signal(Vec::<NewQuestion>::new());
    let (question_text, set_question_text) = signal(String::new());
    let (choice_text, set_choice_text) = signal(String::new());
    let (draft_choices, set_draft_choices) = signal(Vec::<NewChoice>::new());

    let add_choice = move |_| {
        let text = choice_text.get();
        if text.is_empty() {
            return;
        }
        set_draft_choices.update(|choices| choices.push(NewChoice { text }));
        set_choice_text.set(String::new());
    };

    let add_question = move |_| {
        let text = question_text.get();
        let choices = draft_choices.get();
        if text.is_empty() || choices.is_empty() {
            return;
        }
        set_questions.update(|questions| questions.push(NewQuestion { text, choices }));
        set_question_text.set(String::new());
        set_draft_choices.set(Vec::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let survey = NewSurvey {
            name: name.get(),
            questions: questions.get(),
        };
        if survey.name.is_empty() || survey.questions.is_empty() {
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            match actions::submit_new_survey(store, survey).await {
                Ok(created) => {
                    console::log_1(&format!("Created survey {}", created.id).into());
                    navigate("/", Default::default());
                }
                Err(err) => {
                    console::error_1(&format!("Failed to create survey: {err}").into());
                }
            }
        });
    };

    view! {
        <form class="new-survey" on:submit=on_submit>
            <h1>"Create a survey"</h1>
            <input
                type="text"
                placeholder="Survey name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />

            <ul class="drafted-questions">
                <For
                    each=move || questions.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, question)| {
                        let summary = format!("{} ({} choices)", question.text, question.choices.len());
                        view! { <li>{summary}</li> }
                    }
                />
            </ul>

            <div class="question-draft">
                <input
                    type="text"
                    placeholder="Question text"
                    prop:value=move || question_text.get()
                    on:input=move |ev| set_question_text.set(event_target_value(&ev))
                />
                <ul class="draft-choices">
                    <For
                        each=move || draft_choices.get().into_iter().enumerate()
                        key=|(index, _)| *index
                        children=move |(_, choice)| view! { <li>{choice.text.clone()}</li> }
                    />
                </ul>
                <input
                    type="text"
                    placeholder="Choice text"
                    prop:value=move || choice_text.get()
                    on:input=move |ev| set_choice_text.set(event_target_value(&ev))
                />
                <button type="button" on:click=add_choice>"Add choice"</button>
                <button type="button" on:click=add_question>"Add question"</button>
            </div>

            <button type="submit">"Create survey"</button>
        </form>
    }
}
