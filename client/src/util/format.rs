//! Display formatting for feed counters.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Abbreviate a counter: `999`, `1.5K`, `54.0K`, `1.2M`.
///
/// Rounds half up to one decimal. The unit is chosen after rounding, so
/// `999_950` reads `1.0M`.
pub fn format_count(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    let tenths_k = n.saturating_add(50) / 100;
    if tenths_k < 10_000 {
        return format!("{}.{}K", tenths_k / 10, tenths_k % 10);
    }
    let tenths_m = n.saturating_add(50_000) / 100_000;
    format!("{}.{}M", tenths_m / 10, tenths_m % 10)
}

/// Singular/plural label for a counter, e.g. `"1 Comment"`, `"320 Comments"`.
pub fn count_label(n: u64, noun: &str) -> String {
    let suffix = if n == 1 { "" } else { "s" };
    format!("{} {noun}{suffix}", format_count(n))
}
