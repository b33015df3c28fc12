use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("length mismatch: expected {expected}, got {actual}")]
pub struct LengthMismatchError {
    pub expected: usize,
    pub actual: usize,
}

/// Counts the positions at which two equal-length byte strings differ.
///
/// `a` is the reference string; a `b` of a different length is an error.
pub fn distance(a: &[u8], b: &[u8]) -> Result<usize, LengthMismatchError> {
    if a.len() != b.len() {
        return Err(LengthMismatchError {
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() -> Result<(), LengthMismatchError> {
        assert_eq!(distance(b"", b"")?, 0);
        assert_eq!(distance(b"ACGT", b"ACGT")?, 0);
        assert_eq!(distance(b"ACGT", b"ACGA")?, 1);
        assert_eq!(distance(b"ACGT", b"TGCA")?, 4);
        assert_eq!(distance(b"AC", b"ac")?, 2);
        Ok(())
    }

    #[test]
    fn test_distance_with_unequal_lengths() {
        assert_eq!(
            distance(b"AC", b"ACG"),
            Err(LengthMismatchError {
                expected: 2,
                actual: 3
            })
        );

        assert_eq!(
            distance(b"ACG", b""),
            Err(LengthMismatchError {
                expected: 3,
                actual: 0
            })
        );
    }
}
