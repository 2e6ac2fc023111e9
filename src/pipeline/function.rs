//! The hard-coded map and reduce functions for the word-frequency job.

/// Word Count application
pub mod wc {
    use crate::pipeline::worker::KeyValue;

    /// Emits one `(word, 1)` pair for a token.
    pub fn map(token: &str) -> KeyValue {
        KeyValue::new(token.to_owned(), 1)
    }

    /// Sums every contribution shuffled under one key. Addition is
    /// commutative and associative, so reducer completion order never
    /// changes the total.
    pub fn reduce(_key: &str, values: &[u64]) -> u64 {
        values.iter().copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::wc;

    #[test]
    fn map_emits_unit_value() {
        let pair = wc::map("hello");
        assert_eq!(pair.key(), "hello");
        assert_eq!(pair.value(), 1);
    }

    #[test]
    fn reduce_sums_the_group() {
        assert_eq!(wc::reduce("a", &[1, 1, 1]), 3);
        assert_eq!(wc::reduce("b", &[1]), 1);
        assert_eq!(wc::reduce("c", &[]), 0);
    }
}
