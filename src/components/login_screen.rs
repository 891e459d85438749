use yew::prelude::*;
use web_sys::HtmlInputElement;
use gloo_timers::callback::Timeout;
use crate::config::CONFIG;
use crate::hooks::{use_navigator, use_session};
use crate::routes::Route;
use crate::viewmodels::LoginForm;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let form = use_state(LoginForm::default);
    let session = use_session();
    let navigator = use_navigator();

    let on_username = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.username = input.value();
            form.set(next);
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.password = input.value();
            form.set(next);
        })
    };

    let on_toggle_password = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.toggle_password_visibility();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let sign_in = session.sign_in.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*form).clone();
            let Some(attempt) = next.begin() else {
                form.set(next);
                return;
            };
            form.set(next.clone());

            let form = form.clone();
            let sign_in = sign_in.clone();
            let navigator = navigator.clone();
            Timeout::new(CONFIG.delays.login_ms, move || {
                let mut resolved = next;
                match resolved.finish(&attempt, &CONFIG.demo_credentials) {
                    Some(new_session) => {
                        sign_in.emit(new_session);
                        navigator.push(Route::Dashboard);
                    }
                    None => form.set(resolved),
                }
            }).forget();
        })
    };

    let busy = form.is_busy();
    let password_type = if form.show_password { "text" } else { "password" };
    let toggle_label = if form.show_password { "🙈" } else { "👁️" };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🚀"}</div>
                    </div>
                    <h1>{"SPACE CARGO 360"}</h1>
                    <p>{"Sign In"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    if let Some(message) = form.error_message() {
                        <div class="login-error" role="alert">{message}</div>
                    }

                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            placeholder="Enter your username"
                            value={form.username.clone()}
                            oninput={on_username}
                            disabled={busy}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <div class="password-field">
                            <input
                                type={password_type}
                                id="password"
                                name="password"
                                placeholder="Enter your password"
                                value={form.password.clone()}
                                oninput={on_password}
                                disabled={busy}
                            />
                            <button type="button" class="btn-toggle-password" onclick={on_toggle_password}>
                                {toggle_label}
                            </button>
                        </div>
                    </div>

                    <button type="submit" class="btn-login" disabled={busy}>
                        <span class="btn-text">{form.submit_label()}</span>
                    </button>
                </form>
            </div>
        </div>
    }
}
