/// Trait for paths whose direction of traversal can be flipped.
pub trait Reversible: Clone {
    fn reverse(&mut self);

    fn reversed(&self) -> Self {
        let mut clone = self.clone();
        clone.reverse();
        clone
    }
}
