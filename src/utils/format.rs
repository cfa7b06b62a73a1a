//! Helpers de formato para las vistas
//!
//! Montos en dólares con separador de miles, kilometraje y fechas en el
//! formato en-US que muestra el dashboard.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Agrupar los dígitos de un entero en bloques de tres con comas
pub fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}

/// Formatear un monto: `$1,280`, `$99.5`
///
/// Se redondea a centavos y se omiten los ceros finales de la parte decimal.
pub fn format_money(amount: Decimal) -> String {
    let rendered = amount.round_dp(2).normalize().to_string();
    match rendered.split_once('.') {
        Some((integer, fraction)) => format!("${}.{}", group_thousands(integer), fraction),
        None => format!("${}", group_thousands(&rendered)),
    }
}

/// Formatear kilometraje: `45,200 km`
pub fn format_mileage(mileage: u32) -> String {
    format!("{} km", group_thousands(&mileage.to_string()))
}

/// Fecha corta: `11/15/2023`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Fecha larga: `Wednesday, November 15, 2023`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
