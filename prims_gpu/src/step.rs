pub struct DivStep {
    denom: usize,
    next: usize,
}

impl Iterator for DivStep {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.next;
        self.next /= self.denom;
        Some(next)
    }
}

// Returns an iterator that generates numbers by dividing by the given
// denominator. Used for the descending strides of the tree folds.
pub fn div_step(init: usize, denom: usize) -> DivStep {
    DivStep { denom, next: init }
}
