//! Donor Form
//!
//! Field state, the validation rules the form enforces before submission,
//! and the conversion of a valid form into a payment request.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use pix_payments::{Identification, Payer, PaymentRequest, Url};
use rust_decimal::Decimal;

use crate::error::{FormatRule, Result, ValidationError};

/// The five inputs of the donation form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Email,
    FirstName,
    LastName,
    NationalId,
    Amount,
}

impl FormField {
    /// Fields in display order
    pub const ALL: [FormField; 5] = [
        FormField::Email,
        FormField::FirstName,
        FormField::LastName,
        FormField::NationalId,
        FormField::Amount,
    ];

    /// Input `name` attribute
    pub fn name(self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::FirstName => "first_name",
            FormField::LastName => "last_name",
            FormField::NationalId => "national_id",
            FormField::Amount => "amount",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Email => "E-mail",
            FormField::FirstName => "First name",
            FormField::LastName => "Last name",
            FormField::NationalId => "CPF",
            FormField::Amount => "Donation amount",
        }
    }

    /// HTML input type
    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Email => "email",
            _ => "text",
        }
    }

    /// Browser-side `pattern` hint, mirroring [`FormState::validate`]
    pub fn pattern(self) -> Option<&'static str> {
        match self {
            FormField::FirstName | FormField::LastName => Some(r"[A-Za-z\s]+"),
            FormField::NationalId => Some("[0-9]{11}"),
            FormField::Email | FormField::Amount => None,
        }
    }

    /// Tooltip shown when the pattern hint fails
    pub fn title(self) -> Option<&'static str> {
        match self {
            FormField::FirstName => Some("First name must not contain numbers"),
            FormField::LastName => Some("Last name must not contain numbers"),
            FormField::NationalId => Some("CPF must be 11 digits"),
            FormField::Email | FormField::Amount => None,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current value of every form input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: HashMap<FormField, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field's value
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Field value; empty when never set
    pub fn get(&self, field: FormField) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Check the form, stopping at the first broken rule
    ///
    /// Order: national ID present, email, names, amount.
    pub fn validate(&self) -> Result<()> {
        if self.get(FormField::NationalId).is_empty() {
            return Err(ValidationError::MissingField(FormField::NationalId));
        }

        if !is_email(self.get(FormField::Email)) {
            return Err(ValidationError::InvalidFormat(FormatRule::Email));
        }

        if !is_name(self.get(FormField::FirstName)) || !is_name(self.get(FormField::LastName)) {
            return Err(ValidationError::InvalidFormat(FormatRule::Name));
        }

        if !is_amount(self.get(FormField::Amount)) {
            return Err(ValidationError::InvalidFormat(FormatRule::Amount));
        }

        Ok(())
    }

    /// Validate and freeze the form into a PIX payment request
    pub fn to_payment_request(&self, notification_url: Option<&Url>) -> Result<PaymentRequest> {
        self.validate()?;

        // Digits that pass the pattern can still overflow 96-bit decimals.
        let amount = Decimal::from_str(self.get(FormField::Amount))
            .map_err(|_| ValidationError::InvalidFormat(FormatRule::Amount))?;

        let payer = Payer {
            email: self.get(FormField::Email).to_string(),
            first_name: self.get(FormField::FirstName).to_string(),
            last_name: self.get(FormField::LastName).to_string(),
            identification: Identification::cpf(self.get(FormField::NationalId)),
        };

        Ok(PaymentRequest::pix(amount, payer, notification_url.cloned()))
    }
}

/// `local@domain.tld`: no whitespace or extra `@`, and a dot with text on both sides after the `@`
fn is_email(value: &str) -> bool {
    let allowed = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if !allowed(local) || !allowed(domain) {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// ASCII letters and whitespace, at least one character
fn is_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// Digits, optionally followed by `.` and one or two digits
fn is_amount(value: &str) -> bool {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match value.split_once('.') {
        None => digits(value),
        Some((int, frac)) => digits(int) && digits(frac) && frac.len() <= 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_form() -> FormState {
        let mut form = FormState::new();
        form.update_field(FormField::Email, "ana@example.com");
        form.update_field(FormField::FirstName, "Ana Maria");
        form.update_field(FormField::LastName, "Souza");
        form.update_field(FormField::NationalId, "12345678909");
        form.update_field(FormField::Amount, "10.50");
        form
    }

    fn with(field: FormField, value: &str) -> FormState {
        let mut form = valid_form();
        form.update_field(field, value);
        form
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_missing_national_id_wins() {
        let mut form = FormState::new();
        form.update_field(FormField::Email, "not an email");
        form.update_field(FormField::Amount, "abc");
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField(FormField::NationalId))
        );

        assert_eq!(
            with(FormField::NationalId, "").validate(),
            Err(ValidationError::MissingField(FormField::NationalId))
        );
    }

    #[test]
    fn test_email_rule() {
        for ok in ["a@b.c", "ana.souza@mail.example.com.br", "a@b.c.d"] {
            assert_eq!(with(FormField::Email, ok).validate(), Ok(()), "{ok}");
        }
        for bad in ["", "a@b", "ab.c", "a@.c", "a@b.", "@b.c", "a b@c.d", "a@b@c.d", "a@b .c"] {
            assert_eq!(
                with(FormField::Email, bad).validate(),
                Err(ValidationError::InvalidFormat(FormatRule::Email)),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_name_rule() {
        assert_eq!(with(FormField::FirstName, "Ana Maria").validate(), Ok(()));

        for bad in ["Ana1", "", "Ana-Maria", "João"] {
            assert_eq!(
                with(FormField::FirstName, bad).validate(),
                Err(ValidationError::InvalidFormat(FormatRule::Name)),
                "{bad}"
            );
        }
        assert_eq!(
            with(FormField::LastName, "Souza 2").validate(),
            Err(ValidationError::InvalidFormat(FormatRule::Name))
        );
    }

    #[test]
    fn test_amount_rule() {
        for ok in ["10", "10.5", "10.50", "0.01"] {
            assert_eq!(with(FormField::Amount, ok).validate(), Ok(()), "{ok}");
        }
        for bad in ["10.505", "10.555", "", "abc", "10.", ".5", "-1", "1,50", " 10"] {
            assert_eq!(
                with(FormField::Amount, bad).validate(),
                Err(ValidationError::InvalidFormat(FormatRule::Amount)),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_rules_checked_in_order() {
        let mut form = with(FormField::Email, "bad");
        form.update_field(FormField::Amount, "bad");
        assert_eq!(
            form.validate(),
            Err(ValidationError::InvalidFormat(FormatRule::Email))
        );
    }

    #[test]
    fn test_update_field_overwrites() {
        let mut form = FormState::new();
        form.update_field(FormField::Amount, "1");
        form.update_field(FormField::Amount, "12");
        form.update_field(FormField::Amount, "12.3");

        assert_eq!(form.get(FormField::Amount), "12.3");
        assert_eq!(form.values.len(), 1);
        assert_eq!(form.get(FormField::Email), "");
    }

    #[test]
    fn test_payment_request_from_form() {
        let notify = Url::parse("https://hooks.example.com/pix").unwrap();
        let request = valid_form().to_payment_request(Some(&notify)).unwrap();

        assert_eq!(request.transaction_amount, dec!(10.50));
        assert_eq!(request.payment_method_id, "pix");
        assert_eq!(request.payer.email, "ana@example.com");
        assert_eq!(request.payer.first_name, "Ana Maria");
        assert_eq!(request.payer.last_name, "Souza");
        assert_eq!(request.payer.identification, Identification::cpf("12345678909"));
        assert_eq!(request.notification_url, Some(notify));
    }

    #[test]
    fn test_payment_request_rejects_invalid_form() {
        assert_eq!(
            with(FormField::Amount, "abc").to_payment_request(None),
            Err(ValidationError::InvalidFormat(FormatRule::Amount))
        );
    }

    #[test]
    fn test_oversized_amount() {
        let form = with(FormField::Amount, "99999999999999999999999999999999");
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(
            form.to_payment_request(None),
            Err(ValidationError::InvalidFormat(FormatRule::Amount))
        );
    }
}
