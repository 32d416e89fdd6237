use super::utils::{is_email_valid, is_form_valid, is_password_valid, Credentials, FieldValidity};
use crate::utils::{debounce::Debouncer, timer::Scheduler};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

type ValidityListener = Rc<dyn Fn(bool)>;

/// Tracks the login inputs and decides when the form may be submitted.
///
/// Edits only arm a debounced recomputation of the aggregate flag; the flag
/// changes when the inputs have been quiet for the configured delay. Blur
/// checks are immediate and never touch the timer.
pub struct DebouncedValidator<S: Scheduler> {
    inputs: RefCell<Credentials>,
    email_validity: Cell<FieldValidity>,
    password_validity: Cell<FieldValidity>,
    form_valid: Rc<Cell<bool>>,
    listeners: Rc<RefCell<Vec<ValidityListener>>>,
    debouncer: Debouncer<S>,
}

impl<S: Scheduler> DebouncedValidator<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            inputs: RefCell::new(Credentials::default()),
            email_validity: Cell::new(FieldValidity::Unknown),
            password_validity: Cell::new(FieldValidity::Unknown),
            form_valid: Rc::new(Cell::new(false)),
            listeners: Rc::new(RefCell::new(Vec::new())),
            debouncer: Debouncer::new(scheduler, delay),
        }
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.inputs.borrow_mut().email = email.into();
        self.schedule_check();
    }

    pub fn set_password(&self, password: impl Into<String>) {
        self.inputs.borrow_mut().password = password.into();
        self.schedule_check();
    }

    pub fn email(&self) -> String {
        self.inputs.borrow().email.clone()
    }

    pub fn password(&self) -> String {
        self.inputs.borrow().password.clone()
    }

    pub fn is_form_valid(&self) -> bool {
        self.form_valid.get()
    }

    pub fn email_validity(&self) -> FieldValidity {
        self.email_validity.get()
    }

    pub fn password_validity(&self) -> FieldValidity {
        self.password_validity.get()
    }

    pub fn is_check_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Registers a listener called with the aggregate flag each time a
    /// debounced check completes.
    pub fn subscribe(&self, listener: impl Fn(bool) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn blur_email(&self) -> FieldValidity {
        let validity = FieldValidity::from_check(is_email_valid(&self.inputs.borrow().email));
        self.email_validity.set(validity);
        validity
    }

    pub fn blur_password(&self) -> FieldValidity {
        let validity =
            FieldValidity::from_check(is_password_valid(&self.inputs.borrow().password));
        self.password_validity.set(validity);
        validity
    }

    /// Returns the live credentials if the last completed check passed.
    pub fn submit(&self) -> Option<Credentials> {
        if !self.form_valid.get() {
            log::debug!("submit blocked: form is not valid");
            return None;
        }
        Some(self.inputs.borrow().clone())
    }

    /// Cancels a pending check. Safe to call more than once.
    pub fn teardown(&self) {
        if self.debouncer.cancel() {
            log::debug!("pending validation dropped on teardown");
        }
    }

    fn schedule_check(&self) {
        let snapshot = self.inputs.borrow().clone();
        let form_valid = Rc::clone(&self.form_valid);
        let listeners = Rc::clone(&self.listeners);
        self.debouncer.call(move || {
            let valid = is_form_valid(&snapshot.email, &snapshot.password);
            log::debug!("form validity recomputed: {valid}");
            form_valid.set(valid);
            // Listeners may subscribe further listeners; those join the next check.
            let current: Vec<ValidityListener> = listeners.borrow().clone();
            for listener in current {
                listener(valid);
            }
        });
    }
}
