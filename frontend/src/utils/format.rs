use chrono::NaiveDate;

pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("¥{}", grouped)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

pub fn format_days_waiting(days: u32) -> String {
    format!("{days}日経過")
}
