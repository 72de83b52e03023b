use crate::error::ScanError;
use itertools::Itertools;

/// Checks a device result against a host-computed reference, reporting the
/// first differing index and both values.
pub fn verify(reference: &[u32], result: &[u32]) -> Result<(), ScanError> {
    if let Some((index, (&expected, &actual))) = reference
        .iter()
        .zip(result.iter())
        .find_position(|(e, a)| e != a)
    {
        return Err(ScanError::Mismatch {
            index,
            expected,
            actual,
        });
    }
    Ok(())
}
