//! Input masks
//!
//! A [`MaskSpec`] describes how a masked text field formats what the user
//! types. Hosts mount a masked field for any [`TextEntryElement`] that carries
//! one and may use [`MaskSpec::format`] to drive it.
//!
//! Custom patterns use `9` for a digit, `A` for a letter, `S` for a letter or
//! digit and `*` for any character; everything else is a literal:
//!
//! ```rust
//! use plume_layout::MaskSpec;
//!
//! let plate = MaskSpec::custom("AAA-9999");
//! assert_eq!(plate.format("abc1234"), "abc-1234");
//! assert_eq!(plate.raw_value("abc-1234"), "abc1234");
//! ```
//!
//! [`TextEntryElement`]: crate::TextEntryElement

use crate::error::{MaskError, Result};

/// Largest supported money precision
pub const MAX_MONEY_PRECISION: u32 = 8;

/// Phone number layout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhoneFormat {
    /// Brazilian numbers, optionally with a two-digit area code
    Brl { with_ddd: bool },
    International,
}

impl Default for PhoneFormat {
    fn default() -> Self {
        PhoneFormat::Brl { with_ddd: true }
    }
}

/// Currency formatting options
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MoneyOptions {
    /// Digits after the decimal separator
    pub precision: u32,
    /// Decimal separator
    pub separator: char,
    /// Thousands delimiter
    pub delimiter: char,
    pub unit: String,
    pub suffix_unit: String,
}

impl Default for MoneyOptions {
    fn default() -> Self {
        Self {
            precision: 2,
            separator: ',',
            delimiter: '.',
            unit: "R$".to_string(),
            suffix_unit: String::new(),
        }
    }
}

/// Mask type together with its options
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MaskSpec {
    Custom { mask: String },
    /// Four groups of four digits, never obfuscated
    CreditCard,
    Cpf,
    Cnpj,
    ZipCode,
    OnlyNumbers,
    CelPhone(PhoneFormat),
    /// Date/time text laid out by `format` tokens
    /// (`DD`, `MM`, `YYYY`, `YY`, `HH`, `mm`, `ss`)
    Datetime { format: String },
    Money(MoneyOptions),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Digit,
    Letter,
    Alphanumeric,
    Any,
    Literal(char),
}

impl Slot {
    fn from_mask_char(c: char) -> Self {
        match c {
            '9' => Slot::Digit,
            'A' => Slot::Letter,
            'S' => Slot::Alphanumeric,
            '*' => Slot::Any,
            other => Slot::Literal(other),
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self {
            Slot::Digit => c.is_ascii_digit(),
            Slot::Letter => c.is_alphabetic(),
            Slot::Alphanumeric => c.is_alphanumeric(),
            Slot::Any => true,
            Slot::Literal(_) => false,
        }
    }

    fn is_input(&self) -> bool {
        !matches!(self, Slot::Literal(_))
    }
}

const CREDIT_CARD: &str = "9999 9999 9999 9999";
const CPF: &str = "999.999.999-99";
const CNPJ: &str = "99.999.999/9999-99";
const ZIP_CODE: &str = "99999-999";
const PHONE_DDD_8: &str = "(99) 9999-9999";
const PHONE_DDD_9: &str = "(99) 99999-9999";
const PHONE_8: &str = "9999-9999";
const PHONE_9: &str = "99999-9999";
const PHONE_INTERNATIONAL: &str = "+999 999 999 9999";

const DATE_TOKENS: [&str; 7] = ["YYYY", "DD", "MM", "YY", "HH", "mm", "ss"];

impl MaskSpec {
    pub fn custom(mask: impl Into<String>) -> Self {
        MaskSpec::Custom { mask: mask.into() }
    }

    pub fn datetime(format: impl Into<String>) -> Self {
        MaskSpec::Datetime {
            format: format.into(),
        }
    }

    pub fn money(options: MoneyOptions) -> Self {
        MaskSpec::Money(options)
    }

    /// Short type name, as used by masked field hosts
    pub fn type_name(&self) -> &'static str {
        match self {
            MaskSpec::Custom { .. } => "custom",
            MaskSpec::CreditCard => "credit-card",
            MaskSpec::Cpf => "cpf",
            MaskSpec::Cnpj => "cnpj",
            MaskSpec::ZipCode => "zip-code",
            MaskSpec::OnlyNumbers => "only-numbers",
            MaskSpec::CelPhone(_) => "cel-phone",
            MaskSpec::Datetime { .. } => "datetime",
            MaskSpec::Money(_) => "money",
        }
    }

    /// Check the options for this mask
    pub fn validate(&self) -> Result<()> {
        match self {
            MaskSpec::Custom { mask } => {
                if mask.is_empty() {
                    return Err(MaskError::EmptyPattern);
                }
                if !mask.chars().map(Slot::from_mask_char).any(|s| s.is_input()) {
                    return Err(MaskError::NoSlots(mask.clone()));
                }
                Ok(())
            }
            MaskSpec::Datetime { format } => {
                if format.is_empty() {
                    return Err(MaskError::EmptyPattern);
                }
                if !date_slots(format).iter().any(Slot::is_input) {
                    return Err(MaskError::NoSlots(format.clone()));
                }
                Ok(())
            }
            MaskSpec::Money(options) => {
                if options.precision > MAX_MONEY_PRECISION {
                    return Err(MaskError::PrecisionTooLarge {
                        precision: options.precision,
                        max: MAX_MONEY_PRECISION,
                    });
                }
                if options.precision > 0 && options.separator == options.delimiter {
                    return Err(MaskError::AmbiguousSeparators(options.separator));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Format user input for display
    pub fn format(&self, input: &str) -> String {
        match self {
            MaskSpec::OnlyNumbers => digits(input),
            MaskSpec::Money(options) => format_money(options, input),
            _ => {
                let slots = self.slots(input);
                apply_slots(&slots, input)
            }
        }
    }

    /// Strip mask decoration from a formatted value
    ///
    /// Numeric masks yield their digits, money yields a `.`-separated decimal,
    /// custom masks drop literal positions. Date text is returned as shown.
    pub fn raw_value(&self, formatted: &str) -> String {
        match self {
            MaskSpec::Custom { mask } => formatted
                .chars()
                .zip(mask.chars().map(Slot::from_mask_char))
                .filter(|(_, slot)| slot.is_input())
                .map(|(c, _)| c)
                .collect(),
            MaskSpec::Datetime { .. } => formatted.to_string(),
            MaskSpec::Money(options) => {
                let (integer, fraction) = split_amount(&digits(formatted), options.precision);
                if fraction.is_empty() {
                    integer
                } else {
                    format!("{integer}.{fraction}")
                }
            }
            _ => digits(formatted),
        }
    }

    fn slots(&self, input: &str) -> Vec<Slot> {
        let pattern = match self {
            MaskSpec::Custom { mask } => mask.as_str(),
            MaskSpec::Datetime { format } => return date_slots(format),
            MaskSpec::CreditCard => CREDIT_CARD,
            MaskSpec::Cpf => CPF,
            MaskSpec::Cnpj => CNPJ,
            MaskSpec::ZipCode => ZIP_CODE,
            MaskSpec::CelPhone(format) => phone_pattern(*format, digits(input).len()),
            MaskSpec::OnlyNumbers | MaskSpec::Money(_) => "",
        };
        pattern.chars().map(Slot::from_mask_char).collect()
    }
}

fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

fn phone_pattern(format: PhoneFormat, digit_count: usize) -> &'static str {
    match format {
        PhoneFormat::Brl { with_ddd: true } if digit_count > 10 => PHONE_DDD_9,
        PhoneFormat::Brl { with_ddd: true } => PHONE_DDD_8,
        PhoneFormat::Brl { with_ddd: false } if digit_count > 8 => PHONE_9,
        PhoneFormat::Brl { with_ddd: false } => PHONE_8,
        PhoneFormat::International => PHONE_INTERNATIONAL,
    }
}

fn date_slots(format: &str) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(format.len());
    let mut rest = format;
    'outer: while !rest.is_empty() {
        for token in DATE_TOKENS {
            if let Some(after) = rest.strip_prefix(token) {
                slots.extend(std::iter::repeat(Slot::Digit).take(token.len()));
                rest = after;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            slots.push(Slot::Literal(c));
        }
        rest = chars.as_str();
    }
    slots
}

/// Fill `slots` from `input`
///
/// Input characters a slot rejects are skipped. Literals are emitted only
/// once the next input slot is filled, so partial input never ends on a
/// dangling separator.
fn apply_slots(slots: &[Slot], input: &str) -> String {
    let mut out = String::with_capacity(slots.len());
    let mut pending = String::new();
    let mut chars = input.chars().peekable();

    for slot in slots {
        match slot {
            Slot::Literal(literal) => {
                if chars.peek() == Some(literal) {
                    chars.next();
                }
                pending.push(*literal);
            }
            _ => {
                let next = loop {
                    match chars.next() {
                        Some(c) if slot.accepts(c) => break Some(c),
                        Some(_) => continue,
                        None => break None,
                    }
                };
                let Some(c) = next else {
                    return out;
                };
                out.push_str(&pending);
                pending.clear();
                out.push(c);
            }
        }
    }
    out
}

/// Split a digit string into integer and fraction parts at `precision`
fn split_amount(digits: &str, precision: u32) -> (String, String) {
    let precision = precision.min(MAX_MONEY_PRECISION) as usize;
    let trimmed = digits.trim_start_matches('0');
    let padded = format!("{trimmed:0>width$}", width = precision + 1);
    let (integer, fraction) = padded.split_at(padded.len() - precision);
    (integer.to_string(), fraction.to_string())
}

fn format_money(options: &MoneyOptions, input: &str) -> String {
    let (integer, fraction) = split_amount(&digits(input), options.precision);

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, c) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(options.delimiter);
        }
        grouped.push(c);
    }

    let mut out = String::with_capacity(options.unit.len() + grouped.len() + fraction.len() + 1);
    out.push_str(&options.unit);
    out.push_str(&grouped);
    if !fraction.is_empty() {
        out.push(options.separator);
        out.push_str(&fraction);
    }
    out.push_str(&options.suffix_unit);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_skips_rejected_input() {
        let mask = MaskSpec::custom("999-AAA");
        assert_eq!(mask.format("1x2y3abc"), "123-abc");
        assert_eq!(mask.format("12"), "12");
        assert_eq!(mask.format("123"), "123");
        assert_eq!(mask.format("123-a"), "123-a");
    }

    #[test]
    fn test_documents() {
        assert_eq!(MaskSpec::Cpf.format("12345678901"), "123.456.789-01");
        assert_eq!(MaskSpec::Cnpj.format("12345678000199"), "12.345.678/0001-99");
        assert_eq!(MaskSpec::ZipCode.format("01310100"), "01310-100");
        assert_eq!(MaskSpec::Cpf.raw_value("123.456.789-01"), "12345678901");
    }

    #[test]
    fn test_credit_card_groups() {
        assert_eq!(
            MaskSpec::CreditCard.format("4111111111111111"),
            "4111 1111 1111 1111"
        );
        assert_eq!(MaskSpec::CreditCard.format("41111"), "4111 1");
    }

    #[test]
    fn test_phone_switches_to_nine_digits() {
        let phone = MaskSpec::CelPhone(PhoneFormat::default());
        assert_eq!(phone.format("1133334444"), "(11) 3333-4444");
        assert_eq!(phone.format("11933334444"), "(11) 93333-4444");

        let local = MaskSpec::CelPhone(PhoneFormat::Brl { with_ddd: false });
        assert_eq!(local.format("33334444"), "3333-4444");
        assert_eq!(local.format("933334444"), "93333-4444");

        let intl = MaskSpec::CelPhone(PhoneFormat::International);
        assert_eq!(intl.format("5511999998888"), "+551 199 999 8888");
    }

    #[test]
    fn test_datetime_tokens() {
        let date = MaskSpec::datetime("DD/MM/YYYY HH:mm");
        assert_eq!(date.format("241220251830"), "24/12/2025 18:30");
        assert_eq!(date.format("2412"), "24/12");
        assert_eq!(date.raw_value("24/12"), "24/12");
    }

    #[test]
    fn test_money_defaults() {
        let money = MaskSpec::money(MoneyOptions::default());
        assert_eq!(money.format(""), "R$0,00");
        assert_eq!(money.format("5"), "R$0,05");
        assert_eq!(money.format("123456789"), "R$1.234.567,89");
        assert_eq!(money.format("R$0,0012"), "R$0,12");
        assert_eq!(money.raw_value("R$1.234.567,89"), "1234567.89");
    }

    #[test]
    fn test_money_custom_options() {
        let money = MaskSpec::money(MoneyOptions {
            precision: 0,
            separator: '.',
            delimiter: ',',
            unit: String::new(),
            suffix_unit: " USD".to_string(),
        });
        assert_eq!(money.format("1234567"), "1,234,567 USD");
        assert_eq!(money.raw_value("1,234,567 USD"), "1234567");
    }

    #[test]
    fn test_money_precision_is_capped() {
        let huge = MaskSpec::money(MoneyOptions {
            precision: u32::MAX,
            ..MoneyOptions::default()
        });
        let capped = MaskSpec::money(MoneyOptions {
            precision: MAX_MONEY_PRECISION,
            ..MoneyOptions::default()
        });
        assert_eq!(huge.format("123"), capped.format("123"));
        assert_eq!(huge.format("123"), "R$0,00000123");
        assert_eq!(huge.raw_value("R$0,00000123"), "0.00000123");
    }

    #[test]
    fn test_only_numbers() {
        assert_eq!(MaskSpec::OnlyNumbers.format("a1b2 3"), "123");
    }

    #[test]
    fn test_validate() {
        assert_eq!(MaskSpec::custom("").validate(), Err(MaskError::EmptyPattern));
        assert_eq!(
            MaskSpec::custom("--").validate(),
            Err(MaskError::NoSlots("--".into()))
        );
        assert_eq!(
            MaskSpec::datetime("at noon").validate(),
            Err(MaskError::NoSlots("at noon".into()))
        );
        assert!(MaskSpec::datetime("DD/MM").validate().is_ok());

        let too_precise = MaskSpec::money(MoneyOptions {
            precision: 12,
            ..MoneyOptions::default()
        });
        assert!(matches!(
            too_precise.validate(),
            Err(MaskError::PrecisionTooLarge { precision: 12, .. })
        ));

        let ambiguous = MaskSpec::money(MoneyOptions {
            delimiter: ',',
            ..MoneyOptions::default()
        });
        assert_eq!(ambiguous.validate(), Err(MaskError::AmbiguousSeparators(',')));
        assert!(MaskSpec::Cpf.validate().is_ok());
    }
}
