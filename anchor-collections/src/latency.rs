//! Cycle-count helpers for the `#[ignore]`d latency tests.

use hdrhistogram::Histogram;

/// Timestamp counter on x86_64, nanoseconds since first call elsewhere.
#[inline]
pub(crate) fn rdtscp() -> u64 {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        core::arch::x86_64::__rdtscp(&mut 0)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;

        static EPOCH: OnceLock<Instant> = OnceLock::new();
        EPOCH.get_or_init(Instant::now).elapsed().as_nanos() as u64
    }
}

/// Creates a histogram with 3 significant figures.
pub(crate) fn histogram() -> Histogram<u64> {
    Histogram::new(3).unwrap()
}

pub(crate) fn print_histogram(name: &str, hist: &Histogram<u64>) {
    println!(
        "{:24} p50: {:4} cycles | p99: {:4} cycles | p999: {:5} cycles | min: {:4} | max: {:5}",
        name,
        hist.value_at_quantile(0.50),
        hist.value_at_quantile(0.99),
        hist.value_at_quantile(0.999),
        hist.min(),
        hist.max(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_records_samples() {
        let mut hist = histogram();
        hist.record(10).unwrap();
        hist.record(20).unwrap();

        assert_eq!(hist.len(), 2);
        assert_eq!(hist.min(), 10);
    }
}
