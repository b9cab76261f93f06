//! Amount-in-words rendering for the legal "net pay in words" line on
//! payslips. Uses the Indian numbering system (Crore/Lakh/Thousand/Hundred),
//! not Million/Billion grouping. Supports non-negative integers up to 9
//! digits; zero renders as "Only".

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

fn two_digits(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        ONES[n as usize].to_string()
    } else {
        let tens = TENS[(n / 10) as usize];
        let ones = ONES[(n % 10) as usize];
        if ones.is_empty() {
            tens.to_string()
        } else {
            format!("{} {}", tens, ones)
        }
    }
}

fn three_digits(n: u64) -> String {
    debug_assert!(n < 1000);
    let hundreds = n / 100;
    let rest = n % 100;
    if hundreds == 0 {
        two_digits(rest)
    } else if rest == 0 {
        format!("{} Hundred", ONES[hundreds as usize])
    } else {
        // "and" joins the hundreds to the trailing two digits
        format!("{} Hundred and {}", ONES[hundreds as usize], two_digits(rest))
    }
}

/// Render a whole-rupee amount in words, e.g. `1234567` becomes
/// "Twelve Lakh Thirty Four Thousand Five Hundred and Sixty Seven Only".
///
/// Amounts above 9 digits are out of contract and saturate at the maximum
/// renderable value.
pub fn amount_in_words(amount: u64) -> String {
    let amount = amount.min(999_999_999);
    if amount == 0 {
        return "Only".to_string();
    }

    let crore = amount / 10_000_000;
    let lakh = (amount / 100_000) % 100;
    let thousand = (amount / 1_000) % 100;
    let rest = amount % 1_000;

    let mut parts: Vec<String> = Vec::new();
    if crore > 0 {
        parts.push(format!("{} Crore", two_digits(crore)));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", two_digits(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", two_digits(thousand)));
    }
    if rest > 0 {
        parts.push(three_digits(rest));
    }

    format!("{} Only", parts.join(" "))
}
