use leptos::*;

/// Trimmed passwords must be strictly longer than this many characters.
pub const PASSWORD_LENGTH_THRESHOLD: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldValidity {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

impl FieldValidity {
    pub fn from_check(valid: bool) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    pub fn is_invalid(self) -> bool {
        self == Self::Invalid
    }
}

pub fn is_email_valid(email: &str) -> bool {
    email.contains('@')
}

pub fn is_password_valid(password: &str) -> bool {
    password.trim().chars().count() > PASSWORD_LENGTH_THRESHOLD
}

pub fn is_form_valid(email: &str, password: &str) -> bool {
    is_email_valid(email) && is_password_valid(password)
}

/// CSS classes for a form control. Only an explicit failure marks it; a field
/// the user has not left yet stays neutral.
pub fn field_class(validity: FieldValidity) -> &'static str {
    if validity.is_invalid() {
        "control invalid"
    } else {
        "control"
    }
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    email: RwSignal<String>,
    password: RwSignal<String>,
    email_validity: RwSignal<FieldValidity>,
    password_validity: RwSignal<FieldValidity>,
    form_valid: RwSignal<bool>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            email_validity: create_rw_signal(FieldValidity::Unknown),
            password_validity: create_rw_signal(FieldValidity::Unknown),
            form_valid: create_rw_signal(false),
        }
    }
}

impl LoginFormState {
    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn password_signal(&self) -> RwSignal<String> {
        self.password
    }

    pub fn email_validity_signal(&self) -> RwSignal<FieldValidity> {
        self.email_validity
    }

    pub fn password_validity_signal(&self) -> RwSignal<FieldValidity> {
        self.password_validity
    }

    pub fn form_valid_signal(&self) -> RwSignal<bool> {
        self.form_valid
    }
}
