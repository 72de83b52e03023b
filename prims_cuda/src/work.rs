/// Work partition for a kernel launch: the number of logical work items and
/// the tile (work-group) size. The grid is rounded up to whole tiles, so the
/// kernel sees up to `tile - 1` extra items and must bounds-check against
/// the true element count.
#[derive(Clone, Copy, Debug)]
pub struct WorkSize {
    pub tile: u32,
    pub total: u32,
}

impl WorkSize {
    pub fn new(tile: u32, total: u32) -> Self {
        Self { tile, total }
    }

    /// Number of tiles covering `total`.
    pub fn grid(&self) -> u32 {
        (self.total + self.tile - 1) / self.tile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_the_grid_up_to_whole_tiles() {
        assert_eq!(WorkSize::new(128, 1).grid(), 1);
        assert_eq!(WorkSize::new(128, 128).grid(), 1);
        assert_eq!(WorkSize::new(128, 129).grid(), 2);
        assert_eq!(WorkSize::new(128, 1 << 20).grid(), 1 << 13);
    }
}
