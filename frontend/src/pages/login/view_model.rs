use super::{
    utils::{Credentials, LoginFormState},
    validator::DebouncedValidator,
};
use crate::{
    config::{self, LoginConfig},
    utils::timer::{BrowserScheduler, Scheduler},
};
use leptos::*;

pub struct LoginViewModel<S: Scheduler> {
    pub form: LoginFormState,
    validator: StoredValue<DebouncedValidator<S>>,
    on_login: Callback<Credentials>,
}

impl<S: Scheduler> Clone for LoginViewModel<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Scheduler> Copy for LoginViewModel<S> {}

pub fn use_login_view_model(on_login: Callback<Credentials>) -> LoginViewModel<BrowserScheduler> {
    use_login_view_model_with(BrowserScheduler, &config::current(), on_login)
}

pub fn use_login_view_model_with<S: Scheduler>(
    scheduler: S,
    config: &LoginConfig,
    on_login: Callback<Credentials>,
) -> LoginViewModel<S> {
    let form = LoginFormState::default();
    let validator = DebouncedValidator::new(scheduler, config.debounce_delay());

    let form_valid = form.form_valid_signal();
    validator.subscribe(move |valid| form_valid.set(valid));

    let validator = store_value(validator);
    on_cleanup(move || {
        validator.try_with_value(|validator| validator.teardown());
    });

    LoginViewModel {
        form,
        validator,
        on_login,
    }
}

impl<S: Scheduler> LoginViewModel<S> {
    pub fn on_email_input(&self, value: String) {
        self.validator.with_value(|validator| validator.set_email(value.as_str()));
        self.form.email_signal().set(value);
    }

    pub fn on_password_input(&self, value: String) {
        self.validator
            .with_value(|validator| validator.set_password(value.as_str()));
        self.form.password_signal().set(value);
    }

    pub fn on_email_blur(&self) {
        let validity = self.validator.with_value(|validator| validator.blur_email());
        self.form.email_validity_signal().set(validity);
    }

    pub fn on_password_blur(&self) {
        let validity = self
            .validator
            .with_value(|validator| validator.blur_password());
        self.form.password_validity_signal().set(validity);
    }

    /// Hands the credentials to the login handler. Returns `false` without
    /// calling it while the form is not valid.
    pub fn submit(&self) -> bool {
        match self.validator.with_value(|validator| validator.submit()) {
            Some(credentials) => {
                log::info!("login submitted for {}", credentials.email);
                self.on_login.call(credentials);
                true
            }
            None => false,
        }
    }

    pub fn teardown(&self) {
        self.validator.try_with_value(|validator| validator.teardown());
    }
}
