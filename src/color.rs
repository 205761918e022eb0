/// A single RGB pixel value. Two colors are the same vertex exactly when all
/// three channels match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// The channels in (red, green, blue) order.
    pub const fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Color::new(red, green, blue)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Color::new(red, green, blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_is_by_value() {
        let a = Color::new(1, 2, 3);
        let b = Color::from([1, 2, 3]);
        let c = Color::from((3, 2, 1));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Color> = [a, b, c].into_iter().collect();
        assert_eq!(2, set.len());
    }

    #[test]
    fn channels_are_rgb_ordered() {
        assert_eq!([10, 20, 30], Color::new(10, 20, 30).channels());
    }
}
