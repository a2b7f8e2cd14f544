use crate::application::salary_service::SalaryEstimate;

/// Display-ready strings for one estimate
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateViewModel {
    pub base_salary: String,
    pub converted_salary: String,
    pub rate: String,
    pub summary: Vec<(&'static str, String)>,
}

impl EstimateViewModel {
    pub fn from_estimate(estimate: &SalaryEstimate) -> Self {
        let profile = &estimate.profile;
        Self {
            base_salary: format_money(estimate.base_salary, &estimate.base_currency),
            converted_salary: format_money(estimate.converted_salary, &estimate.currency),
            rate: format!(
                "1 {} = {:.2} {}",
                estimate.base_currency, estimate.rate, estimate.currency
            ),
            summary: vec![
                ("👤 Age", profile.age.to_string()),
                ("⚧ Gender", profile.gender.to_string()),
                ("🎓 Education", profile.education.to_string()),
                ("💼 Job Title", profile.job_title.to_string()),
                ("📈 Experience", format!("{} years", profile.experience)),
            ],
        }
    }
}

pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "INR" => Some("₹"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// `75000.0, "USD"` -> `$75,000.00`; unknown codes are suffixed instead.
pub fn format_money(amount: f64, code: &str) -> String {
    let grouped = group_thousands(amount);
    match currency_symbol(code) {
        Some(symbol) if amount < 0.0 => format!("-{}{}", symbol, &grouped[1..]),
        Some(symbol) => format!("{}{}", symbol, grouped),
        None => format!("{} {}", grouped, code),
    }
}

fn group_thousands(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
