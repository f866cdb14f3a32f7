//! Number formatting for display.
//!
//! Below one million: German digit grouping (`1.234.567`, decimal comma,
//! up to three fraction digits). From one million up: the value scaled to
//! its power of 1000, rounded to three decimals, followed by the scale name
//! (`1,5 Million`, `2,346 Billion`).

const SCALE_NAMES: [&str; 102] = [
    "",
    "",
    "Million",
    "Billion",
    "Trillion",
    "Quadrillion",
    "Quintillion",
    "Sextillion",
    "Septillion",
    "Octillion",
    "Nonillion",
    "Decillion",
    "Undecillion",
    "Duodecillion",
    "Tredecillion",
    "Quattuordecillion",
    "Quindecillion",
    "Sexdecillion",
    "Septendecillion",
    "Octodecillion",
    "Novemdecillion",
    "Vigintillion",
    "Unvigintillion",
    "Duovigintillion",
    "Trevigintillion",
    "Quattuorvigintillion",
    "Quinvigintillion",
    "Sexvigintillion",
    "Septenvigintillion",
    "Octovigintillion",
    "Novemvigintillion",
    "Trigintillion",
    "Untrigintillion",
    "Duotrigintillion",
    "Tretrigintillion",
    "Quattuortrigintillion",
    "Quintrigintillion",
    "Sextrigintillion",
    "Septentrigintillion",
    "Octotrigintillion",
    "Novemtrigintillion",
    "Quadragintillion",
    "Unquadragintillion",
    "Duoquadragintillion",
    "Trequadragintillion",
    "Quattuorquadragintillion",
    "Quinquadragintillion",
    "Sexquadragintillion",
    "Septenquadragintillion",
    "Octoquadragintillion",
    "Novemquadragintillion",
    "Quinquagintillion",
    "Unquinquagintillion",
    "Duoquinquagintillion",
    "Trequinquagintillion",
    "Quattuorquinquagintillion",
    "Quinquinquagintillion",
    "Sexquinquagintillion",
    "Septenquinquagintillion",
    "Octoquinquagintillion",
    "Novemquinquagintillion",
    "Sexagintillion",
    "Unsexagintillion",
    "Duosexagintillion",
    "Tresexagintillion",
    "Quattuorsexagintillion",
    "Quinsexagintillion",
    "Sexsexagintillion",
    "Septensexagintillion",
    "Octosexagintillion",
    "Novemsexagintillion",
    "Septuagintillion",
    "Unseptuagintillion",
    "Duoseptuagintillion",
    "Treseptuagintillion",
    "Quattuorseptuagintillion",
    "Quinseptuagintillion",
    "Sexseptuagintillion",
    "Septenseptuagintillion",
    "Octoseptuagintillion",
    "Novemseptuagintillion",
    "Octogintillion",
    "Unoctogintillion",
    "Duooctogintillion",
    "Treoctogintillion",
    "Quattuoroctogintillion",
    "Quinoctogintillion",
    "Sexoctogintillion",
    "Septenoctogintillion",
    "Octooctogintillion",
    "Novemoctogintillion",
    "Nonagintillion",
    "Unnonagintillion",
    "Duononagintillion",
    "Trenonagintillion",
    "Quattuornonagintillion",
    "Quinnonagintillion",
    "Sexnonagintillion",
    "Septennonagintillion",
    "Octononagintillion",
    "Novemnonagintillion",
    "Centillion",
];

const NAMED_THRESHOLD: f64 = 1e6;

/// Format a raw economy value for display.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    if n < 0.0 {
        return format!("-{}", format_number(-n));
    }
    if n < NAMED_THRESHOLD {
        return group_german(n);
    }
    for (power, name) in SCALE_NAMES.iter().enumerate().skip(2) {
        let lower = 1000f64.powi(power as i32);
        if n < lower * 1000.0 {
            let scaled = (n / lower * 1000.0).round() / 1000.0;
            return format!("{} {}", group_german(scaled), name);
        }
    }
    format!("{:e}", n)
}

/// German grouping of a value below one million (or a scaled mantissa).
fn group_german(n: f64) -> String {
    let thousandths = (n * 1000.0).round() as u64;
    let int_part = thousandths / 1000;
    let frac = thousandths % 1000;

    let s = int_part.to_string();
    let mut grouped = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if frac == 0 {
        return grouped;
    }
    let digits = format!("{:03}", frac);
    format!("{},{}", grouped, digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_use_german_grouping() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1234.0), "1.234");
        assert_eq!(format_number(987_654.0), "987.654");
    }

    #[test]
    fn fractions_use_decimal_comma() {
        assert_eq!(format_number(1234.5), "1.234,5");
        assert_eq!(format_number(0.125), "0,125");
        assert_eq!(format_number(2.0004), "2");
    }

    #[test]
    fn millions_and_up_use_scale_names() {
        assert_eq!(format_number(1_000_000.0), "1 Million");
        assert_eq!(format_number(1_500_000.0), "1,5 Million");
        assert_eq!(format_number(2_345_678_901.0), "2,346 Billion");
        assert_eq!(format_number(7e12), "7 Trillion");
    }

    #[test]
    fn beyond_centillion_falls_back_to_scientific() {
        assert_eq!(format_number(1e307), "1e307");
    }

    #[test]
    fn non_finite_and_negative() {
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(-1234.0), "-1.234");
    }
}
