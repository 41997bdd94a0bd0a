//! Round-robin partitioning of a sequence into display columns.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    #[error("cannot partition into zero parts")]
    ZeroParts,
}

/// Split `items` into exactly `parts` buckets, sending item `i` to bucket
/// `i % parts`. Order inside each bucket follows the input, bucket sizes
/// differ by at most one, and trailing buckets are empty when `items` is
/// shorter than `parts`.
pub fn split_round_robin<T: Clone>(items: &[T], parts: usize) -> Result<Vec<Vec<T>>, PartitionError> {
    if parts == 0 {
        return Err(PartitionError::ZeroParts);
    }

    let mut buckets: Vec<Vec<T>> = (0..parts)
        .map(|bucket| Vec::with_capacity(items.len().saturating_sub(bucket).div_ceil(parts)))
        .collect();
    for (index, item) in items.iter().enumerate() {
        buckets[index % parts].push(item.clone());
    }
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_into_three() {
        let items = ['a', 'b', 'c', 'd', 'e', 'f'];
        let columns = split_round_robin(&items, 3).unwrap();
        assert_eq!(columns, vec![vec!['a', 'd'], vec!['b', 'e'], vec!['c', 'f']]);
    }

    #[test]
    fn six_into_two() {
        let items = ['a', 'b', 'c', 'd', 'e', 'f'];
        let columns = split_round_robin(&items, 2).unwrap();
        assert_eq!(columns, vec![vec!['a', 'c', 'e'], vec!['b', 'd', 'f']]);
    }

    #[test]
    fn zero_parts_is_rejected() {
        assert_eq!(split_round_robin(&[1, 2, 3], 0), Err(PartitionError::ZeroParts));
        assert_eq!(
            split_round_robin::<u8>(&[], 0),
            Err(PartitionError::ZeroParts)
        );
    }

    #[test]
    fn short_input_leaves_trailing_buckets_empty() {
        let columns = split_round_robin(&["x"], 3).unwrap();
        assert_eq!(columns, vec![vec!["x"], vec![], vec![]]);
    }

    #[test]
    fn buckets_are_balanced_and_reassemble() {
        for len in 1..40usize {
            let items: Vec<usize> = (0..len).collect();
            for parts in 1..=len + 2 {
                let buckets = split_round_robin(&items, parts).unwrap();
                assert_eq!(buckets.len(), parts);

                let sizes: Vec<usize> = buckets.iter().map(Vec::len).collect();
                let max = *sizes.iter().max().unwrap();
                let min = *sizes.iter().min().unwrap();
                assert!(max - min <= 1, "len={len} parts={parts} sizes={sizes:?}");
                assert_eq!(sizes.iter().sum::<usize>(), len);

                // Reading bucket heads in turn restores the input order.
                let mut rebuilt = Vec::with_capacity(len);
                for row in 0..max {
                    for bucket in &buckets {
                        if let Some(item) = bucket.get(row) {
                            rebuilt.push(*item);
                        }
                    }
                }
                assert_eq!(rebuilt, items, "len={len} parts={parts}");
            }
        }
    }
}
