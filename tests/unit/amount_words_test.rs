use vetan::core::words::amount_in_words;

/// Zero net pay still needs a legal words line
#[test]
fn test_zero_amount() {
    assert_eq!(amount_in_words(0), "Only");
}

#[test]
fn test_single_and_two_digit_amounts() {
    assert_eq!(amount_in_words(1), "One Only");
    assert_eq!(amount_in_words(19), "Nineteen Only");
    assert_eq!(amount_in_words(20), "Twenty Only");
    assert_eq!(amount_in_words(99), "Ninety Nine Only");
}

/// "and" joins hundreds to the trailing two digits
#[test]
fn test_hundreds_conjunction() {
    assert_eq!(amount_in_words(100), "One Hundred Only");
    assert_eq!(amount_in_words(101), "One Hundred and One Only");
    assert_eq!(amount_in_words(999), "Nine Hundred and Ninety Nine Only");
}

/// Indian grouping: Thousand and Lakh segments, not Million
#[test]
fn test_lakh_grouping() {
    assert_eq!(
        amount_in_words(1_234_567),
        "Twelve Lakh Thirty Four Thousand Five Hundred and Sixty Seven Only"
    );
    assert_eq!(amount_in_words(100_000), "One Lakh Only");
    assert_eq!(amount_in_words(2_500_000), "Twenty Five Lakh Only");
}

#[test]
fn test_crore_grouping() {
    assert_eq!(amount_in_words(10_000_000), "One Crore Only");
    assert_eq!(
        amount_in_words(12_345_678),
        "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred and Seventy Eight Only"
    );
}

/// Empty segments are skipped, not rendered as zero words
#[test]
fn test_sparse_segments() {
    assert_eq!(amount_in_words(10_00_001), "Ten Lakh One Only");
    assert_eq!(amount_in_words(1_000), "One Thousand Only");
    assert_eq!(amount_in_words(37_600), "Thirty Seven Thousand Six Hundred Only");
}

#[test]
fn test_maximum_renderable_amount() {
    assert_eq!(
        amount_in_words(999_999_999),
        "Ninety Nine Crore Ninety Nine Lakh Ninety Nine Thousand Nine Hundred and Ninety Nine Only"
    );
}

/// Out-of-contract amounts saturate instead of panicking
#[test]
fn test_ten_digit_amount_saturates() {
    assert_eq!(amount_in_words(1_000_000_000), amount_in_words(999_999_999));
    assert_eq!(amount_in_words(u64::MAX), amount_in_words(999_999_999));
}
