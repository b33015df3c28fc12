mod split;

pub use self::split::{split, SplitError};
