//! Report formatting for terminal output
//!
//! The category breakdown is shown as a bar chart, one line per category,
//! with each category's share of the total.

use crate::reports::CategoryBreakdown;

const BAR_WIDTH: usize = 20;

/// Format the category breakdown, or a "no data" notice when it is empty
pub fn format_breakdown(breakdown: &CategoryBreakdown, currency_symbol: &str) -> String {
    if breakdown.is_empty() {
        return "No data to analyze.\n".to_string();
    }

    let name_width = breakdown
        .rows()
        .iter()
        .map(|r| r.category.chars().count())
        .max()
        .unwrap_or(8)
        .clamp(8, 24);
    let line_width = name_width + BAR_WIDTH + 30;

    let mut output = String::new();
    output.push_str(&format_header("Spending by Category", line_width));
    output.push('\n');
    output.push_str(&double_separator(line_width));
    output.push('\n');

    let max_cents = breakdown
        .rows()
        .iter()
        .map(|r| r.total.cents())
        .max()
        .unwrap_or(0) as f64;

    for row in breakdown.rows() {
        output.push_str(&format!(
            "{}  {}  {}  {}\n",
            left_align(&truncate(&row.category, name_width), name_width),
            format_bar(row.total.cents() as f64, max_cents, BAR_WIDTH),
            right_align(&row.total.format_with_symbol(currency_symbol), 12),
            right_align(&format_percentage(row.percentage), 6),
        ));
    }

    output.push_str(&separator(line_width));
    output.push('\n');
    output.push_str(&format!(
        "{}  {}  {}\n",
        left_align("Total", name_width),
        " ".repeat(BAR_WIDTH),
        right_align(&breakdown.total().format_with_symbol(currency_symbol), 12),
    ));

    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal bar proportional to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn format_header(title: &str, width: usize) -> String {
    let padding = width.saturating_sub(title.len()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

fn separator(width: usize) -> String {
    "─".repeat(width)
}

fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

fn left_align(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            Money::from_cents(cents),
            category,
            "",
        )
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 6), "Caf...");
    }

    #[test]
    fn test_breakdown_output() {
        let expenses = vec![expense(3000, "Food"), expense(1000, "Transport")];
        let output = format_breakdown(&CategoryBreakdown::generate(&expenses), "$");

        assert!(output.contains("Spending by Category"));
        assert!(output.contains("$30.00"));
        assert!(output.contains("75%"));
        assert!(output.contains("25%"));
        assert!(output.contains("$40.00"));
    }

    #[test]
    fn test_empty_breakdown_notice() {
        let output = format_breakdown(&CategoryBreakdown::default(), "");
        assert_eq!(output, "No data to analyze.\n");
    }
}
