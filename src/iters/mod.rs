
mod iter;

pub use self::iter::*;
