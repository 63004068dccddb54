// src/forms.rs

/// Returns the names of required fields whose value is blank after trimming.
pub fn missing_required<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

/// CSS class for an input: `erro` marks a required field left blank.
pub fn field_class(name: &str, missing: &[&str]) -> &'static str {
    if missing.contains(&name) {
        "erro"
    } else {
        ""
    }
}

/// pt-BR currency, e.g. `R$ 2.500,00` (non-breaking space after the symbol).
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$\u{a0}{grouped},{frac:02}")
}
