use crate::domain::model::ContactClassification;

/// Canonicalizes raw phone input. This is a plausibility filter, not an
/// E.164 validator: anything with at least 7 digits after cleanup passes.
pub struct PhoneNormalizer {
    default_country_code: Option<String>,
}

impl PhoneNormalizer {
    pub fn new(default_country_code: Option<String>) -> Self {
        Self {
            default_country_code,
        }
    }

    pub fn normalize(&self, raw: &str) -> Option<String> {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        if cleaned.is_empty() {
            return None;
        }

        // "00" international prefix becomes "+" before anything else.
        let cleaned = match cleaned.strip_prefix("00") {
            Some(rest) => format!("+{}", rest),
            None => cleaned,
        };

        // Only a leading '+' is meaningful; runs collapse, interior ones go.
        let leading_plus = cleaned.starts_with('+');
        let digits: String = cleaned.chars().filter(char::is_ascii_digit).collect();
        let mut number = if leading_plus {
            format!("+{}", digits)
        } else {
            digits
        };

        if number.starts_with('0') {
            if let Some(code) = &self.default_country_code {
                number = format!("{}{}", code, number.trim_start_matches('0'));
            }
        }

        let digit_count = number.chars().filter(|c| c.is_ascii_digit()).count();
        if digit_count < 7 {
            return None;
        }
        Some(number)
    }
}

/// Order-sensitive heuristic: email first, then phone, plain text as the
/// catch-all. Total and deterministic.
pub struct ContactClassifier {
    normalizer: PhoneNormalizer,
}

impl ContactClassifier {
    pub fn new(default_country_code: Option<String>) -> Self {
        Self {
            normalizer: PhoneNormalizer::new(default_country_code),
        }
    }

    pub fn classify(&self, raw: &str) -> ContactClassification {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ContactClassification::Text(String::new());
        }

        if let Some((_, domain)) = trimmed.rsplit_once('@') {
            if domain.contains('.') {
                return ContactClassification::Email(trimmed.to_string());
            }
        }

        if let Some(phone) = self.normalizer.normalize(trimmed) {
            return ContactClassification::Phone(phone);
        }

        ContactClassification::Text(trimmed.to_string())
    }
}
