/// Inclusive scan. Sums wrap like the device kernels do.
pub fn sequential_scan(xs: &[u32], ys: &mut [u32]) {
    let mut accumulator = 0u32;

    for (i, &x) in xs.iter().enumerate() {
        accumulator = accumulator.wrapping_add(x);
        ys[i] = accumulator;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_the_reference_example() {
        let xs = [1u32, 2, 3, 4, 5];
        let mut ys = [0u32; 5];
        sequential_scan(&xs, &mut ys);
        assert_eq!(ys, [1, 3, 6, 10, 15]);
    }

    #[test]
    fn wraps_on_overflow() {
        let xs = [u32::MAX, 2];
        let mut ys = [0u32; 2];
        sequential_scan(&xs, &mut ys);
        assert_eq!(ys, [u32::MAX, 1]);
    }
}
