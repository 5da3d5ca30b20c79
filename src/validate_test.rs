use super::*;

#[test]
fn empty_text_is_invalid() {
    assert_eq!(assess("", 10), InputValidity::Invalid);
}

#[test]
fn nine_chars_is_invalid_ten_is_valid() {
    assert_eq!(assess("123456789", 10), InputValidity::Invalid);
    assert_eq!(assess("1234567890", 10), InputValidity::Valid);
}

#[test]
fn surrounding_whitespace_does_not_count() {
    assert_eq!(assess("   short   \n\t", 10), InputValidity::Invalid);
    assert_eq!(assess("\n  hello world  \n", 10), InputValidity::Valid);
}

#[test]
fn inner_whitespace_counts() {
    assert_eq!(assess("a        b", 10), InputValidity::Valid);
}

#[test]
fn bmp_text_counts_one_unit_per_character() {
    // 9 characters, 18 bytes, 9 UTF-16 units.
    assert_eq!(assess("ééééééééé", 10), InputValidity::Invalid);
    assert_eq!(assess("éééééééééé", 10), InputValidity::Valid);
}

#[test]
fn astral_characters_count_two_units() {
    // 5 emoji are 10 UTF-16 units.
    assert_eq!(assess("😀😀😀😀😀", 10), InputValidity::Valid);
    assert_eq!(assess("😀😀😀😀", 10), InputValidity::Invalid);
}

#[test]
fn byte_order_mark_is_trimmed() {
    assert_eq!(assess("\u{FEFF}123456789", 10), InputValidity::Invalid);
    assert_eq!(assess("123456789\u{FEFF}", 10), InputValidity::Invalid);
}

#[test]
fn next_line_control_is_not_trimmed() {
    assert_eq!(assess("\u{85}123456789", 10), InputValidity::Valid);
}

#[test]
fn non_breaking_space_is_trimmed() {
    assert_eq!(assess("\u{A0}123456789\u{3000}", 10), InputValidity::Invalid);
}

#[test]
fn border_follows_validity() {
    let cfg = PageConfig::default();
    assert_eq!(InputValidity::Invalid.border(&cfg), "#dc2626");
    assert_eq!(InputValidity::Valid.border(&cfg), "var(--primary)");
}
