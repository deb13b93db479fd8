
mod view;

pub use self::view::*;
