/// Money is carried as integer cents everywhere it persists.
pub type MoneyCents = i64;

/// A share in `[0, 1]`, clamped on the way in.
pub type Ratio = f64;

/// Lenient numeric coercion: non-numeric or non-finite input becomes 0.
pub fn num(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Clamp a ratio to `[0, 1]`. NaN is treated as 0.
pub fn clamp01(x: f64) -> Ratio {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

pub fn max0(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

/// Round half away from zero to a whole cent.
pub fn round_cents(x: f64) -> MoneyCents {
    x.round() as MoneyCents
}

/// Round to two decimals (hours and currency units).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Round to four decimals (percentages expressed as ratios).
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Currency units to cents, nudged by epsilon so `12.345` lands on `1235`.
pub fn float_to_cents(n: f64) -> MoneyCents {
    ((n + f64::EPSILON) * 100.0).round() as MoneyCents
}

/// Decimal string to cents. Extra fractional digits are truncated, not rounded.
pub fn parse_cents(s: &str) -> MoneyCents {
    let s = s.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
    let whole = int_part.parse::<i64>().unwrap_or(0);
    let frac: String = frac_part.chars().chain("00".chars()).take(2).collect();
    let frac = frac.parse::<i64>().unwrap_or(0);
    let cents = whole * 100 + frac;
    if negative { -cents } else { cents }
}

pub fn cents_to_float(c: MoneyCents) -> f64 {
    c as f64 / 100.0
}

/// Saturates at the `i64` bounds instead of overflowing.
pub fn sum_cents<I: IntoIterator<Item = MoneyCents>>(xs: I) -> MoneyCents {
    xs.into_iter().fold(0, MoneyCents::saturating_add)
}

/// Split `total` cents across `weights`, handing leftover cents to the
/// largest fractional parts first. Ties keep input order, so the same
/// inputs always produce the same split.
pub fn stable_distribute_cents(total: MoneyCents, weights: &[f64]) -> Vec<MoneyCents> {
    if weights.is_empty() {
        return Vec::new();
    }

    let sum: f64 = weights.iter().sum();
    let sum = if sum == 0.0 { 1.0 } else { sum };

    let raw: Vec<f64> = weights.iter().map(|w| total as f64 * w / sum).collect();
    let mut out: Vec<MoneyCents> = raw.iter().map(|x| x.floor() as MoneyCents).collect();
    let remainder = total - out.iter().sum::<MoneyCents>();

    let mut by_fraction: Vec<(f64, usize)> =
        raw.iter().enumerate().map(|(i, x)| (x - x.floor(), i)).collect();
    // sort_by is stable: equal fractions keep their index order.
    by_fraction.sort_by(|a, b| b.0.total_cmp(&a.0));

    for k in 0..remainder.max(0) as usize {
        let (_, idx) = by_fraction[k % by_fraction.len()];
        out[idx] += 1;
    }

    out
}
