//! Display formatting for counters and freshness timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Compact counter display: `999`, `1.5K`, `2.5M`.
///
/// The scaled value is rounded like `Number.prototype.toFixed(1)`: the
/// quotient `n / unit` is a double, and that double's exact value is rounded
/// to one decimal with ties going up. So `1250 -> "1.3K"` but
/// `1150 -> "1.1K"`, since `1.15` is stored just below the tie.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{}M", to_fixed_1(n / 1_000_000.0))
    } else if n >= 1_000.0 {
        format!("{}K", to_fixed_1(n / 1_000.0))
    } else if n.is_infinite() {
        "-Infinity".to_owned()
    } else {
        n.to_string()
    }
}

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i32 = 1075;

/// `x.toFixed(1)` for `x >= 1`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn to_fixed_1(x: f64) -> String {
    if x.is_infinite() {
        return "Infinity".to_owned();
    }
    if x >= 1e21 {
        // toFixed falls back to exponent notation here.
        return format!("{x:e}").replace('e', "e+");
    }
    let bits = x.to_bits();
    let mantissa = (bits & ((1 << MANTISSA_BITS) - 1)) | (1 << MANTISSA_BITS);
    let exponent = ((bits >> MANTISSA_BITS) & 0x7ff) as i32 - EXPONENT_BIAS;
    if exponent >= 0 {
        // Integral; `{:.1}` prints integral doubles exactly.
        return format!("{x:.1}");
    }
    // x = mantissa / 2^shift exactly, with shift in 1..=52 since x >= 1.
    let shift = exponent.unsigned_abs();
    let scaled = mantissa * 10;
    let remainder = scaled & ((1 << shift) - 1);
    let mut tenths = scaled >> shift;
    if remainder >= 1 << (shift - 1) {
        tenths += 1;
    }
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Local wall-clock reading, already split into calendar fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalStamp {
    pub year: i32,
    /// 1-based.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl LocalStamp {
    /// Read the browser's local time.
    #[cfg(feature = "browser")]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn now() -> Self {
        let date = js_sys::Date::new_0();
        Self {
            year: date.get_full_year() as i32,
            month: date.get_month() + 1,
            day: date.get_date(),
            hour: date.get_hours(),
            minute: date.get_minutes(),
        }
    }

    /// `DD/MM/YYYY`.
    #[must_use]
    pub fn date(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }

    /// `DD/MM/YYYY, HH:MM`, the pt-BR short date-time.
    #[must_use]
    pub fn date_time(&self) -> String {
        format!("{}, {:02}:{:02}", self.date(), self.hour, self.minute)
    }
}
