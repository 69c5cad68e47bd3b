//! Field validation rules.
//!
//! Rules run against trimmed values, except the email shape check, which the
//! shipped page applies to the raw value — surrounding whitespace therefore
//! fails the format rule, not the required rule. Messages are the
//! user-visible literals.

pub const MSG_NAME_REQUIRED: &str = "Por favor, informe seu nome.";
pub const MSG_NAME_TOO_SHORT: &str = "Nome deve ter pelo menos 2 caracteres.";
pub const MSG_EMAIL_REQUIRED: &str = "Por favor, informe seu email.";
pub const MSG_EMAIL_INVALID: &str = "Por favor, informe um email válido.";
pub const MSG_COMPANY_REQUIRED: &str = "Por favor, informe sua empresa.";
pub const MSG_CHALLENGE_REQUIRED: &str = "Por favor, descreva seu desafio ou objetivo.";
pub const MSG_CHALLENGE_TOO_SHORT: &str =
    "Por favor, forneça mais detalhes (mínimo 10 caracteres).";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Company,
    Challenge,
}

impl FieldKind {
    /// Document order, which is also the submit-time validation order.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Company,
        FieldKind::Challenge,
    ];
}

/// Returns the error message for an invalid value, `None` when valid.
pub fn validate(kind: FieldKind, value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    match kind {
        FieldKind::Name => {
            if trimmed.is_empty() {
                Some(MSG_NAME_REQUIRED)
            } else if trimmed.chars().count() < 2 {
                Some(MSG_NAME_TOO_SHORT)
            } else {
                None
            }
        }
        FieldKind::Email => {
            if trimmed.is_empty() {
                Some(MSG_EMAIL_REQUIRED)
            } else if !email_shape_ok(value) {
                Some(MSG_EMAIL_INVALID)
            } else {
                None
            }
        }
        FieldKind::Company => {
            if trimmed.is_empty() {
                Some(MSG_COMPANY_REQUIRED)
            } else {
                None
            }
        }
        FieldKind::Challenge => {
            if trimmed.is_empty() {
                Some(MSG_CHALLENGE_REQUIRED)
            } else if trimmed.chars().count() < 10 {
                Some(MSG_CHALLENGE_TOO_SHORT)
            } else {
                None
            }
        }
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, non-empty local
/// part, and a dot somewhere strictly inside the domain.
fn email_shape_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    let bytes = domain.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i > 0 && i + 1 < bytes.len())
}
