//! Payment method normalization.
//!
//! Free-text payment methods are folded into a fixed vocabulary. Matching is
//! on a compact key (alphanumeric characters only, uppercased) so spacing,
//! case and punctuation variants all resolve; unrecognized values pass
//! through unchanged.

/// Raw value (compact key) to normalized method.
const METHOD_TABLE: &[(&str, &str)] = &[
    ("CASH", "Cash"),
    ("DEBITCARD", "Card"),
    ("CREDITCARD", "Card"),
    ("GOOGLEPAY", "UPI"),
    ("PAYTM", "UPI"),
    ("UPI", "UPI"),
    ("NEFT", "Bank Transfer"),
    ("IMPS", "Bank Transfer"),
    ("RTGS", "Bank Transfer"),
    ("CHEQUE", "Cheque"),
    ("CREDITS", "Credits"),
];

fn compact_key(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

/// Normalize a payment method to the fixed vocabulary, or pass the original
/// through when it is not recognized.
pub fn normalize_payment_method(raw: &str) -> String {
    let key = compact_key(raw);
    for (candidate, normalized) in METHOD_TABLE {
        if *candidate == key {
            return (*normalized).to_string();
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_methods_normalize() {
        assert_eq!(normalize_payment_method("GooglePay"), "UPI");
        assert_eq!(normalize_payment_method("Cash"), "Cash");
        assert_eq!(normalize_payment_method("NEFT"), "Bank Transfer");
        assert_eq!(normalize_payment_method("Debit Card"), "Card");
        assert_eq!(normalize_payment_method("credit card"), "Card");
        assert_eq!(normalize_payment_method("Cheque"), "Cheque");
    }

    #[test]
    fn unknown_methods_pass_through() {
        assert_eq!(normalize_payment_method("Wallet"), "Wallet");
        assert_eq!(normalize_payment_method(""), "");
    }
}
