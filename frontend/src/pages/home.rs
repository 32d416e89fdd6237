use crate::{
    components::{button::Button, card::Card},
    state::auth,
};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth_state, set_auth) = auth::use_auth();
    let email = move || auth_state.get().email.unwrap_or_default();
    let on_logout = Callback::new(move |_: ev::MouseEvent| auth::logout(set_auth));

    view! {
        <Card class="home">
            <h2>{"Welcome back!"}</h2>
            <p class="home-email">{email}</p>
            <Button on_click=on_logout>{"Logout"}</Button>
        </Card>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::test_support::ssr::render_html;

    #[test]
    fn home_greets_the_signed_in_user() {
        let html = render_html(|| {
            let (_, set_auth) = auth::use_auth();
            set_auth.set(AuthState {
                is_logged_in: true,
                email: Some("a@b.com".into()),
            });
            view! { <HomePage /> }
        });
        assert!(html.contains("Welcome back!"));
        assert!(html.contains("a@b.com"));
        assert!(html.contains("Logout"));
    }
}
