// model = "claude-opus-4-5"
// created = "2026-08-06"
// modified = "2026-08-06"
// driver = "Isaac Clayton"

//! Property-based tests for growable buffers.

use proptest::prelude::*;
use tandem::buf::{GrowBuf, IndexError, INITIAL_CAPACITY};

// =============================================================================
// Test helpers
// =============================================================================

fn build(values: &[i64]) -> GrowBuf<i64> {
    let mut buf = GrowBuf::new();
    for &v in values {
        buf.append(v);
    }
    return buf;
}

// =============================================================================
// Append properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// N appends produce length N and in-order readback.
    #[test]
    fn append_sequence_reads_back_in_order(
        values in prop::collection::vec(any::<i64>(), 0..300),
    ) {
        let buf = build(&values);

        prop_assert_eq!(buf.len(), values.len());
        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(buf.get(i), Ok(v));
        }
        prop_assert_eq!(buf.to_vec(), values);
    }

    /// Batch append is equivalent to element-wise append.
    #[test]
    fn append_all_matches_repeated_append(
        prefix in prop::collection::vec(any::<i64>(), 0..50),
        batch in prop::collection::vec(any::<i64>(), 0..50),
    ) {
        let mut batched = build(&prefix);
        batched.append_all(&batch);

        let mut one_by_one = build(&prefix);
        for &v in &batch {
            one_by_one.append(v);
        }

        prop_assert_eq!(batched.len(), prefix.len() + batch.len());
        prop_assert_eq!(batched.to_vec(), one_by_one.to_vec());
    }

    /// Capacity covers length at every step, and growth events stay
    /// logarithmic in the number of appends.
    #[test]
    fn growth_is_logarithmic(n in 1usize..4000) {
        let mut buf = GrowBuf::new();
        let mut growth_events = 0;
        let mut last_cap = buf.capacity();

        for i in 0..n {
            buf.append(i as i64);
            prop_assert!(buf.capacity() >= buf.len());
            if buf.capacity() != last_cap {
                growth_events += 1;
                last_cap = buf.capacity();
            }
        }

        let bound = (n.max(INITIAL_CAPACITY) as f64).log2().ceil() as usize + 1;
        prop_assert!(
            growth_events <= bound,
            "{} growth events for {} appends (bound {})",
            growth_events, n, bound
        );
    }
}

// =============================================================================
// Window properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A window over live elements agrees with the origin's contents.
    #[test]
    fn window_matches_origin_range(
        values in prop::collection::vec(any::<i64>(), 1..200),
        start_pct in 0.0..=1.0f64,
        len_pct in 0.0..=1.0f64,
    ) {
        let buf = build(&values);
        let start = ((start_pct * values.len() as f64) as usize).min(values.len());
        let len = ((len_pct * (values.len() - start) as f64) as usize).min(values.len() - start);
        let end = start + len;

        let view = buf.slice(start, end).unwrap();
        prop_assert_eq!(view.len(), len);
        prop_assert_eq!(view.capacity(), buf.capacity() - start);
        prop_assert_eq!(view.to_vec(), &values[start..end]);
    }

    /// Writes through an in-capacity window are visible on the origin.
    #[test]
    fn window_set_writes_through(
        values in prop::collection::vec(any::<i64>(), 1..100),
        index_pct in 0.0..1.0f64,
        replacement in any::<i64>(),
    ) {
        let buf = build(&values);
        let mut view = buf.slice(0, values.len()).unwrap();
        let index = ((index_pct * values.len() as f64) as usize).min(values.len() - 1);

        view.set(index, replacement).unwrap();

        let mut expected = values.clone();
        expected[index] = replacement;
        prop_assert_eq!(buf.to_vec(), expected);
    }

    /// Inverted ranges always error, never silently swap or clamp.
    #[test]
    fn inverted_ranges_error(
        values in prop::collection::vec(any::<i64>(), 0..50),
        end in 0usize..100,
        delta in 1usize..100,
    ) {
        let buf = build(&values);
        let start = end + delta;

        prop_assert_eq!(
            buf.slice(start, end).unwrap_err(),
            IndexError::InvertedRange { start, end }
        );
    }

    /// Reads at or past the length always error.
    #[test]
    fn get_past_length_errors(
        values in prop::collection::vec(any::<i64>(), 0..50),
        past in 0usize..100,
    ) {
        let buf = build(&values);
        let index = values.len() + past;

        prop_assert_eq!(
            buf.get(index),
            Err(IndexError::OutOfBounds { index, length: values.len() })
        );
    }
}
