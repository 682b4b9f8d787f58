use std::io::Write;
use std::path::{Path, PathBuf};

/// digits written after the decimal point of every floating point value
pub(crate) const PRECISION: usize = 14;

/// Format a float the way C's `%.14e` does, e.g. `5.00000000000000e-01`.
///
/// 14 digits after the point round-trip every `f64` written by this crate closely enough
/// for visualization. Rust prints exponents as `e-1`, so the exponent is rewritten
/// with an explicit sign and at least two digits.
pub fn format_scientific(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let formatted = format!("{:.*e}", PRECISION, value);

    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        // inf / -inf
        None => formatted,
    }
}

/// write a row of floats separated by single spaces, terminated by a newline
pub(crate) fn write_row<W: Write>(writer: &mut W, values: &[f64]) -> std::io::Result<()> {
    let row = values
        .iter()
        .map(|value| format_scientific(*value))
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(writer, "{}", row)
}

/// `prefix.000042` for rank 42
pub(crate) fn rank_suffixed(prefix: &Path, rank: u32) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(format!(".{:06}", rank));
    PathBuf::from(name)
}
