use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;
use url::Url;

/// Characters `encodeURIComponent` leaves unescaped, besides alphanumerics.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Body line shown when the optional investment-range control is absent or
/// empty.
pub const BUDGET_NOT_PROVIDED: &str = "Não informado";

#[derive(Debug, Error)]
pub enum MailtoError {
    #[error("composed mailto target did not parse: {0}")]
    InvalidTarget(#[from] url::ParseError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: String,
    pub budget: String,
    pub challenge: String,
}

/// Build the mail-client handoff target for a validated submission.
///
/// The returned string keeps our own encoding (the `Url` round-trip is only
/// a sanity parse) so the subject/body layout stays byte-for-byte stable.
pub fn compose(to: &str, msg: &ContactMessage) -> Result<String, MailtoError> {
    let subject = format!("[Calesco] Contato de {} - {}", msg.name, msg.company);
    let body = format!(
        "Nome: {}\nEmail: {}\nEmpresa: {}\nFaixa de Investimento: {}\n\nDesafio/Objetivo:\n{}",
        msg.name, msg.email, msg.company, msg.budget, msg.challenge
    );

    let target = format!(
        "mailto:{to}?subject={}&body={}",
        utf8_percent_encode(&subject, COMPONENT),
        utf8_percent_encode(&body, COMPONENT)
    );

    Url::parse(&target)?;
    Ok(target)
}
