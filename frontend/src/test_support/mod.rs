#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod timer;

#[cfg(test)]
pub mod helpers {
    use crate::pages::login::utils::Credentials;
    use leptos::*;

    pub fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Login handler that records every submission it receives.
    pub fn recording_handler() -> (Callback<Credentials>, RwSignal<Vec<Credentials>>) {
        let received = create_rw_signal(Vec::<Credentials>::new());
        let handler = Callback::new(move |creds: Credentials| {
            received.update(|all| all.push(creds));
        });
        (handler, received)
    }
}
