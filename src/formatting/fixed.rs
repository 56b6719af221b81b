// Fixed-point number formatting with ECMAScript `toFixed` rounding

/// Values at or above this magnitude are printed in exponential form
const EXPONENTIAL_THRESHOLD: f64 = 1e21;

/// Format `value` with exactly `digits` digits after the decimal point.
///
/// Rounds on the exact binary value of the number. Exact ties round away
/// from zero, so `0.125` gives `"0.13"` while `1.005` (stored slightly
/// below) gives `"1.00"`. Negative zero prints without a sign.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    if magnitude >= EXPONENTIAL_THRESHOLD {
        return exponential(value);
    }

    let body = if is_exact_tie(magnitude, digits) {
        // One extra digit prints the tie exactly, ending in '5'
        let wide = format!("{:.prec$}", magnitude, prec = digits + 1);
        let truncated = &wide[..wide.len() - 1];
        round_up_last_digit(truncated.strip_suffix('.').unwrap_or(truncated))
    } else {
        format!("{:.prec$}", magnitude, prec = digits)
    };

    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// Whether `magnitude` lies exactly halfway between two `digits`-place decimals.
///
/// `m * 10^d = n + 0.5` means `m = (2n + 1) / (2^(d+1) * 5^d)`. A double
/// can only hold that when `m * 2^(d+1)` is an odd integer.
fn is_exact_tie(magnitude: f64, digits: usize) -> bool {
    let Ok(exp) = i32::try_from(digits + 1) else {
        return false;
    };
    let scaled = magnitude * 2f64.powi(exp);
    if scaled.fract() != 0.0 || scaled >= 2f64.powi(53) {
        return false;
    }
    (scaled as u64) % 2 == 1
}

/// Add one unit in the last place of a plain decimal string, carrying left.
fn round_up_last_digit(decimal: &str) -> String {
    let mut bytes = decimal.as_bytes().to_vec();
    let mut carry = true;

    for b in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
            }
        }
    }

    let mut out = String::with_capacity(bytes.len() + 1);
    if carry {
        out.push('1');
    }
    out.extend(bytes.iter().map(|&b| b as char));
    out
}

/// Shortest round-trip exponential form with an explicit exponent sign
fn exponential(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}
