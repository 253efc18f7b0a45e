use crate::graphql;
use crate::navigation::RouterNavigator;
use crate::storage::{load_config, BrowserStorage};
use crate::VERSION;
use shared::{complete_login, LoginForm, LOGIN_FAILED_MESSAGE};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// The Login button only works once both fields are filled and no request is
/// in flight.
fn can_submit(form: &LoginForm, loading: bool) -> bool {
    !loading && form.is_submittable()
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form = use_state(LoginForm::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let on_phone_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                form.set(LoginForm {
                    phone: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_password_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                form.set(LoginForm {
                    password: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            let form = (*form).clone();
            if !can_submit(&form, *loading) {
                return;
            }
            let Some(navigator) = navigator.clone() else {
                log::warn!("Login page mounted outside a router");
                return;
            };

            loading.set(true);
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let endpoint = load_config().graphql_path;
                match graphql::sign_in(&endpoint, &form).await {
                    Ok(tokens) => {
                        let navigator = RouterNavigator::new(navigator);
                        if let Err(e) =
                            complete_login(&BrowserStorage, &navigator, &tokens, form.phone.trim())
                        {
                            log::error!("Failed to store session: {}", e);
                            error.set(Some(LOGIN_FAILED_MESSAGE.to_string()));
                        }
                    }
                    Err(e) => {
                        log::warn!("Sign-in failed: {}", e);
                        error.set(Some(LOGIN_FAILED_MESSAGE.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let submit_disabled = !can_submit(&form, *loading);

    html! {
        <div class="login-container">
            <div class="login-hero">
                <div class="login-brand">
                    <img src="image.png" alt="Logo" class="login-logo" />
                    <div class="login-roles">
                        <p>{ "ሰራተኛ" }</p>
                        <p>{ "ቀጣሪ" }</p>
                        <p>{ "ውሳኔ ሰጪ" }</p>
                    </div>
                </div>
                <h1>{ "Ethiopia Labor Market" }</h1>
                <h2>{ "Information System" }</h2>
            </div>

            <div class="login-panel">
                <div class="login-card">
                    <h2>{ "Login" }</h2>
                    if let Some(message) = (*error).clone() {
                        <p class="login-error">{ message }</p>
                    }
                    <form onsubmit={on_submit}>
                        <input
                            type="text"
                            placeholder="Phone number"
                            value={form.phone.clone()}
                            oninput={on_phone_input}
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            value={form.password.clone()}
                            oninput={on_password_input}
                        />
                        <button type="submit" class="login-button" disabled={submit_disabled}>
                            { if *loading { "Logging in..." } else { "Login" } }
                        </button>
                        <p class="forgot-password">{ "Forgot Password" }</p>
                    </form>
                </div>
                <div class="login-footer">
                    <span class="version">{ format!("v{}", VERSION) }</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_cannot_submit() {
        let mut form = LoginForm::default();
        assert!(!can_submit(&form, false));

        form.phone = "0911000000".to_string();
        assert!(!can_submit(&form, false));

        form.password = "secret".to_string();
        assert!(can_submit(&form, false));
        assert!(!can_submit(&form, true));
    }
}
