use crate::Color;
use num_traits::Float;

/// Straight line distance between two colors in RGB space. All channels are
/// weighted equally.
pub fn euclidean_distance<T: Float>(a: &Color, b: &Color) -> T {
    a.channels()
        .iter()
        .zip(b.channels().iter())
        .map(|(x, y)| channel_diff::<T>(*x, *y))
        .map(|diff| diff * diff)
        .fold(T::zero(), std::ops::Add::add)
        .sqrt()
}

fn channel_diff<T: Float>(x: u8, y: u8) -> T {
    let to_float = |channel: u8| T::from(channel).expect("u8 channel must convert to float");
    to_float(x) - to_float(y)
}
