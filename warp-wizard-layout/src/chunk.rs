//! Order-preserving fixed-size chunking.

use warp_wizard_config::WizardError;

/// Partition `items` into groups of `size`, the last possibly smaller.
///
/// Produces `ceil(items.len() / size)` groups; concatenating them in order
/// reproduces the input. Empty input yields zero groups, not one empty group.
///
/// `size == 0` violates the input contract and fails with
/// [`WizardError::InvalidArgument`]; the max-panes prompt validates `>= 1`
/// upstream, so hitting this from the wizard is a logic error.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, WizardError> {
    if size == 0 {
        return Err(WizardError::InvalidArgument(
            "chunk size must be at least 1".to_string(),
        ));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_ceil_len_over_size_groups() {
        for n in 0..20usize {
            for size in 1..6usize {
                let items: Vec<usize> = (0..n).collect();
                let groups = chunk(&items, size).unwrap();
                assert_eq!(groups.len(), n.div_ceil(size), "n={n} size={size}");
                assert!(groups.iter().all(|g| g.len() <= size));

                let flattened: Vec<usize> = groups.into_iter().flatten().collect();
                assert_eq!(flattened, items, "n={n} size={size}");
            }
        }
    }

    #[test]
    fn all_groups_full_except_possibly_last() {
        let items: Vec<u32> = (0..7).collect();
        let groups = chunk(&items, 3).unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0], vec![0, 1, 2]);
        assert_eq!(groups[1], vec![3, 4, 5]);
        assert_eq!(groups[2], vec![6]);
    }

    #[test]
    fn exact_multiple_has_no_short_group() {
        let items: Vec<u32> = (0..6).collect();
        let groups = chunk(&items, 3).unwrap();
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.len() == 3));
    }

    #[test]
    fn empty_input_yields_zero_groups() {
        let groups = chunk::<u32>(&[], 4).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn zero_size_is_an_invalid_argument() {
        let err = chunk(&[1, 2, 3], 0).unwrap_err();
        assert!(matches!(err, WizardError::InvalidArgument(_)));
    }
}
