//! Presentation formatting helpers: pt-BR currency, CNPJ masking,
//! large-number abbreviation, and input debouncing.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

// ---------------------------------------------------------------------------
// Number formatting
// ---------------------------------------------------------------------------

/// Render a value with pt-BR grouping and exactly two decimal digits,
/// e.g. `1234567.891` -> `"1.234.567,89"`.
fn format_decimal(value: f64) -> String {
    // NaN and the infinities have no sensible rendering, and casting them to
    // an integer produces garbage. Treat them as zero.
    if !value.is_finite() {
        return "0,00".to_string();
    }
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{}{},{:02}", if negative { "-" } else { "" }, grouped, frac)
}

/// Render a value as Brazilian-real currency, e.g. `1234.5` -> `"R$ 1.234,50"`.
pub fn format_currency(value: f64) -> String {
    if value.is_finite() && value < 0.0 {
        format!("-R$ {}", format_decimal(-value))
    } else {
        format!("R$ {}", format_decimal(value))
    }
}

/// Mask a 14-digit CNPJ as `NN.NNN.NNN/NNNN-NN`.
///
/// Non-digits are stripped first; anything that does not leave exactly 14
/// digits is returned unchanged.
pub fn format_cnpj(cnpj: &str) -> String {
    let cleaned: String = cnpj.chars().filter(|c| c.is_ascii_digit()).collect();
    if cleaned.len() != 14 {
        return cnpj.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &cleaned[0..2],
        &cleaned[2..5],
        &cleaned[5..8],
        &cleaned[8..12],
        &cleaned[12..14]
    )
}

/// Abbreviate a large value with a `B`/`M`/`K` suffix and two decimals,
/// e.g. `1_500_000_000.0` -> `"1,50B"`. Absent values render as the zero
/// currency string `"R$ 0,00"`.
pub fn format_large_number(value: Option<f64>) -> String {
    let value = match value {
        Some(v) => v,
        None => return "R$ 0,00".to_string(),
    };

    if !value.is_finite() {
        return format_decimal(value);
    }

    if value >= 1_000_000_000.0 {
        format!("{}B", format_decimal(value / 1_000_000_000.0))
    } else if value >= 1_000_000.0 {
        format!("{}M", format_decimal(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("{}K", format_decimal(value / 1_000.0))
    } else {
        format_decimal(value)
    }
}

// ---------------------------------------------------------------------------
// Debouncer
// ---------------------------------------------------------------------------

/// Trailing-edge debouncer: each call cancels the previously scheduled
/// invocation and schedules the new one after the fixed delay, so a burst of
/// calls collapses into the last one.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `action` to run after the delay, superseding any pending one.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn call<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(task) = pending.take() {
            task.abort();
        }
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Drop any pending invocation without running it.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(task) = pending.take() {
            task.abort();
        }
    }
}
