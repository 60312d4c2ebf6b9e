use std::collections::BTreeMap;
use std::fmt;

/// Identifier of an input field. Each form kind declares the subset it
/// actually carries; targeting an undeclared field is a wiring bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single check over a field value, with the message shown when it fails.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// The value must not be blank or whitespace-only.
    Required(&'static str),
    /// The value must be a well-formed email address (with a TLD).
    Email(&'static str),
    /// The value must be `min` to `max` ASCII digits, nothing else.
    Digits {
        min: usize,
        max: usize,
        message: &'static str,
    },
    /// The value must be at least `min` characters long.
    MinLen {
        min: usize,
        message: &'static str,
    },
    /// The value must equal the current value of another field.
    Matches {
        other: FieldId,
        message: &'static str,
    },
}

impl Rule {
    /// Returns the failure message if the rule does not hold for `value`.
    pub(super) fn check(
        &self,
        value: &str,
        values: &BTreeMap<FieldId, String>,
    ) -> Option<&'static str> {
        match *self {
            Self::Required(message) => value.trim().is_empty().then_some(message),
            Self::Email(message) => email_address::EmailAddress::parse_with_options(
                value,
                email_address::Options::default().with_required_tld(),
            )
            .is_err()
            .then_some(message),
            Self::Digits { min, max, message } => {
                let digits = value.chars().all(|c| c.is_ascii_digit());
                (!digits || value.len() < min || value.len() > max).then_some(message)
            }
            Self::MinLen { min, message } => (value.chars().count() < min).then_some(message),
            Self::Matches { other, message } => {
                let other = values.get(&other).map(String::as_str).unwrap_or("");
                (value != other).then_some(message)
            }
        }
    }
}

/// Declarative description of one field: its rule chain, evaluated in
/// order with the first failure winning, and the other fields whose
/// errors an edit of this one also clears (cross-field rules live on the
/// dependent field, so editing the source must clear them too).
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: FieldId,
    pub rules: &'static [Rule],
    pub clears: &'static [FieldId],
}

const LOGIN_FIELDS: [FieldSpec; 2] = [
    FieldSpec {
        id: FieldId::Email,
        rules: &[
            Rule::Required("Please enter your email"),
            Rule::Email("Invalid email address"),
        ],
        clears: &[],
    },
    FieldSpec {
        id: FieldId::Password,
        rules: &[
            Rule::Required("Please enter your password"),
            Rule::MinLen {
                min: 6,
                message: "Password must be at least 6 characters",
            },
        ],
        clears: &[],
    },
];

const REGISTER_FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        id: FieldId::FullName,
        rules: &[
            Rule::Required("Please enter your full name"),
            Rule::MinLen {
                min: 2,
                message: "Full name must be at least 2 characters",
            },
        ],
        clears: &[],
    },
    FieldSpec {
        id: FieldId::Email,
        rules: &[
            Rule::Required("Please enter your email"),
            Rule::Email("Invalid email address"),
        ],
        clears: &[],
    },
    FieldSpec {
        id: FieldId::Phone,
        rules: &[
            Rule::Required("Please enter your phone number"),
            Rule::Digits {
                min: 10,
                max: 11,
                message: "Phone number must be 10 or 11 digits",
            },
        ],
        clears: &[],
    },
    FieldSpec {
        id: FieldId::Password,
        rules: &[
            Rule::Required("Please enter your password"),
            Rule::MinLen {
                min: 6,
                message: "Password must be at least 6 characters",
            },
        ],
        clears: &[FieldId::ConfirmPassword],
    },
    FieldSpec {
        id: FieldId::ConfirmPassword,
        rules: &[
            Rule::Required("Please confirm your password"),
            Rule::Matches {
                other: FieldId::Password,
                message: "Passwords do not match",
            },
        ],
        clears: &[],
    },
];

pub(super) const TERMS_MESSAGE: &str = "You must agree to the terms of use";

/// The two form configurations sharing one state-machine shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    /// Declared fields, in validation order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Login => &LOGIN_FIELDS,
            Self::Register => &REGISTER_FIELDS,
        }
    }

    /// Whether the terms-of-use checkbox takes part in validation.
    pub fn requires_terms(&self) -> bool {
        matches!(self, Self::Register)
    }

    pub(super) fn failure_message(&self) -> &'static str {
        match self {
            Self::Login => "Login failed. Please try again.",
            Self::Register => "Registration failed. Please try again.",
        }
    }

    pub(super) fn provider_failure_message(&self) -> &'static str {
        match self {
            Self::Login => "Google sign-in failed.",
            Self::Register => "Google sign-up failed.",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
        }
    }
}
