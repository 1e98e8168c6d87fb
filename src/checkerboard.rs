pub const CHECKER_SIZE: u32 = 256;
pub const CHECKER_BLOCK: u32 = 32;
pub const CHECKER_LIGHT: u8 = 255;
pub const CHECKER_DARK: u8 = 80;

/// Grayscale checkerboard, stored as tightly packed RGB8 rows starting at the bottom left.
pub struct Checkerboard {
    width: u32,
    height: u32,
    block: u32,
    light: u8,
    dark: u8,
}

impl Checkerboard {
    pub fn new(width: u32, height: u32, block: u32) -> Self {
        Self {
            width,
            height,
            block: block.max(1),
            light: CHECKER_LIGHT,
            dark: CHECKER_DARK,
        }
    }

    pub fn with_intensities(mut self, light: u8, dark: u8) -> Self {
        self.light = light;
        self.dark = dark;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn texel(&self, x: u32, y: u32) -> u8 {
        if (x / self.block + y / self.block) % 2 == 1 {
            self.light
        } else {
            self.dark
        }
    }

    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.width as usize * self.height as usize * 3);

        for y in 0..self.height {
            for x in 0..self.width {
                let value = self.texel(x, y);
                data.extend_from_slice(&[value, value, value]);
            }
        }

        data
    }
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self::new(CHECKER_SIZE, CHECKER_SIZE, CHECKER_BLOCK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let board = Checkerboard::default();
        let data = board.to_rgb8();

        assert_eq!(data.len(), 256 * 256 * 3);
        assert_eq!(board.texel(0, 0), CHECKER_DARK);
        assert_eq!(board.texel(31, 31), CHECKER_DARK);
        assert_eq!(board.texel(32, 0), CHECKER_LIGHT);
        assert_eq!(board.texel(0, 32), CHECKER_LIGHT);
        assert_eq!(board.texel(32, 32), CHECKER_DARK);
        assert_eq!(board.texel(255, 0), CHECKER_LIGHT);
    }

    #[test]
    fn rows_are_gray() {
        let board = Checkerboard::new(64, 64, 32).with_intensities(10, 20);
        let data = board.to_rgb8();

        for (i, px) in data.chunks_exact(3).enumerate() {
            let (x, y) = (i as u32 % 64, i as u32 / 64);

            let value = board.texel(x, y);
            assert_eq!(px, &[value, value, value]);
        }

        assert_eq!(&data[..3], &[20, 20, 20]);
        assert_eq!(&data[32 * 3..33 * 3], &[10, 10, 10]);
    }

    #[test]
    fn zero_block_is_clamped() {
        let board = Checkerboard::new(2, 2, 0);

        assert_eq!(board.texel(0, 0), CHECKER_DARK);
        assert_eq!(board.texel(1, 0), CHECKER_LIGHT);
    }
}
