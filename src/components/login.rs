//! Login Component
//!
//! Sign-in / registration form. Auth failures arrive over the context
//! event bus and render inline.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::context::AppContext;
use crate::models::Credentials;
use crate::store::use_app_store;

#[component]
pub fn Login() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let credentials = move || Credentials {
        email: email.get(),
        password: password.get(),
    };

    let sign_in = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            ctx.clear_auth_event();
            let credentials = credentials();
            let navigate = navigate.clone();
            spawn_local(async move {
                if actions::login(store, ctx, credentials).await {
                    navigate("/surveys", Default::default());
                }
            });
        }
    };

    let sign_up = move |_| {
        ctx.clear_auth_event();
        let credentials = credentials();
        let navigate = navigate.clone();
        spawn_local(async move {
            if actions::register(store, ctx, credentials).await {
                navigate("/surveys", Default::default());
            }
        });
    };

    view! {
        <form class="login" on:submit=sign_in>
            <h1>"Sign in"</h1>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <div class="login-buttons">
                <button type="submit">"Sign in"</button>
                <button type="button" on:click=sign_up>"Register"</button>
            </div>
            {move || ctx.auth_event.get().map(|event| view! {
                <p class="auth-error">{event.message().to_string()}</p>
            })}
        </form>
    }
}
