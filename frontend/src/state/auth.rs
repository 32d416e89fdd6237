use crate::pages::login::utils::Credentials;
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Client-local session flag. Nothing is verified or persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_logged_in: bool,
    pub email: Option<String>,
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = use_auth();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    match use_context::<AuthContext>() {
        Some(ctx) => ctx,
        None => {
            let ctx = create_signal(AuthState::default());
            provide_context::<AuthContext>(ctx);
            ctx
        }
    }
}

pub fn login(set_auth_state: WriteSignal<AuthState>, credentials: Credentials) {
    log::info!("signed in as {}", credentials.email);
    set_auth_state.set(AuthState {
        is_logged_in: true,
        email: Some(credentials.email),
    });
}

pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    log::info!("signed out");
    set_auth_state.set(AuthState::default());
}
