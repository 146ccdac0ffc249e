//! Term representation shared by the scoring context and the index readers.

mod term;

pub use self::term::Term;
