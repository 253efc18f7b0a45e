use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found-container">
            <div class="not-found-content">
                <h1>{ "Page Not Found" }</h1>
                <p class="not-found-message">
                    { "The page you are looking for does not exist." }
                </p>
                <Link<Route> to={Route::Login} classes="not-found-link">
                    { "Back to login" }
                </Link<Route>>
            </div>
        </div>
    }
}
