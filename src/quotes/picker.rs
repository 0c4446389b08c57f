//! Random selection from the quote pool

use crate::quotes::record::Quote;
use rand::Rng;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Source of pool indices
pub trait IndexPicker: Send + Sync {
    /// Pick an index in `0..len`; `len` is never zero
    fn pick(&self, len: usize) -> usize;
}

/// Uniform picks from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

/// Replays a fixed list of indices, then keeps picking 0
///
/// Out-of-range indices wrap around the pool length.
#[derive(Debug, Default)]
pub struct SequencePicker {
    indices: Mutex<VecDeque<usize>>,
}

impl SequencePicker {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: Mutex::new(indices.into_iter().collect()),
        }
    }
}

impl IndexPicker for SequencePicker {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let next = match self.indices.lock() {
            Ok(mut indices) => indices.pop_front().unwrap_or(0),
            Err(poisoned) => poisoned.into_inner().pop_front().unwrap_or(0),
        };
        next % len
    }
}

/// Draw one quote, returning it with the remaining pool
///
/// Returns `None` for an empty pool.
pub fn draw(mut pool: Vec<Quote>, picker: &dyn IndexPicker) -> Option<(Quote, Vec<Quote>)> {
    if pool.is_empty() {
        return None;
    }

    let index = picker.pick(pool.len()).min(pool.len() - 1);
    let quote = pool.remove(index);
    Some((quote, pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(n: usize) -> Vec<Quote> {
        (0..n)
            .map(|i| Quote::new(format!("quote {i}"), format!("author {i}"), "test"))
            .collect()
    }

    #[test]
    fn draw_removes_picked_quote() {
        let picker = SequencePicker::new([2]);
        let (quote, rest) = draw(pool(4), &picker).unwrap();

        assert_eq!(quote.quote, "quote 2");
        assert_eq!(rest.len(), 3);
        assert!(!rest.contains(&quote));
    }

    #[test]
    fn draw_from_empty_pool() {
        assert!(draw(vec![], &ThreadRngPicker).is_none());
    }

    #[test]
    fn draw_last_quote_leaves_empty_pool() {
        let (quote, rest) = draw(pool(1), &ThreadRngPicker).unwrap();
        assert_eq!(quote.quote, "quote 0");
        assert!(rest.is_empty());
    }

    #[test]
    fn thread_rng_stays_in_range() {
        for len in 1..50 {
            assert!(ThreadRngPicker.pick(len) < len);
        }
    }

    #[test]
    fn sequence_picker_replays_then_defaults() {
        let picker = SequencePicker::new([1, 7]);
        assert_eq!(picker.pick(5), 1);
        assert_eq!(picker.pick(5), 2);
        assert_eq!(picker.pick(5), 0);
    }
}
