//! Simple profiling counters for understanding allocation behavior.

use std::sync::atomic::{AtomicU64, Ordering};

pub static REALLOC_COUNT: AtomicU64 = AtomicU64::new(0);
pub static CELLS_COPIED: AtomicU64 = AtomicU64::new(0);
pub static CELLS_WRITTEN: AtomicU64 = AtomicU64::new(0);

#[inline]
pub fn realloc(copied: usize) {
    REALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
    CELLS_COPIED.fetch_add(copied as u64, Ordering::Relaxed);
}

#[inline]
pub fn write(count: usize) {
    CELLS_WRITTEN.fetch_add(count as u64, Ordering::Relaxed);
}

pub fn reset() {
    REALLOC_COUNT.store(0, Ordering::Relaxed);
    CELLS_COPIED.store(0, Ordering::Relaxed);
    CELLS_WRITTEN.store(0, Ordering::Relaxed);
}

pub fn report() -> String {
    let reallocs = REALLOC_COUNT.load(Ordering::Relaxed);
    let copied = CELLS_COPIED.load(Ordering::Relaxed);
    let written = CELLS_WRITTEN.load(Ordering::Relaxed);
    let per_write = if written > 0 { copied as f64 / written as f64 } else { 0.0 };

    format!(
        "Reallocs: {}, cells copied: {}, cells written: {} ({:.2} copies per write)",
        reallocs, copied, written, per_write
    )
}
