use super::*;

#[test]
fn small_counts_are_plain() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
}

#[test]
fn thousands_get_one_decimal_k() {
    assert_eq!(format_count(1_000), "1.0K");
    assert_eq!(format_count(1_540), "1.5K");
    assert_eq!(format_count(54_000), "54.0K");
    assert_eq!(format_count(5_100), "5.1K");
}

#[test]
fn millions_get_one_decimal_m() {
    assert_eq!(format_count(1_000_000), "1.0M");
    assert_eq!(format_count(1_240_000), "1.2M");
}

#[test]
fn rounding_up_to_a_million_switches_unit() {
    assert_eq!(format_count(999_949), "999.9K");
    assert_eq!(format_count(999_950), "1.0M");
    assert_eq!(format_count(999_999), "1.0M");
}

#[test]
fn rounding_is_half_up() {
    assert_eq!(format_count(1_050), "1.1K");
    assert_eq!(format_count(1_049), "1.0K");
    assert_eq!(format_count(1_250_000), "1.3M");
}

#[test]
fn huge_counts_do_not_overflow() {
    assert!(format_count(u64::MAX).ends_with('M'));
}

#[test]
fn count_label_pluralizes() {
    assert_eq!(count_label(1, "Comment"), "1 Comment");
    assert_eq!(count_label(320, "Comment"), "320 Comments");
    assert_eq!(count_label(5_100, "Share"), "5.1K Shares");
}
