use colored::{ColoredString, Colorize};

/// Format a float as a whole currency amount with thousands separators: ¥1,235
pub fn money(val: f64, symbol: &str) -> String {
    let whole = format!("{:.0}", val.abs());
    let mut with_commas = String::new();
    for (i, c) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if val < 0.0 && whole != "0" {
        format!("-{symbol}{with_commas}")
    } else {
        format!("{symbol}{with_commas}")
    }
}

/// Green for zero or positive, red for negative.
pub fn signed_money(val: f64, symbol: &str) -> ColoredString {
    let s = money(val, symbol);
    if val >= 0.0 {
        s.green()
    } else {
        s.red()
    }
}
