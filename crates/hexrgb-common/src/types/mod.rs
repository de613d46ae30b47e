mod rgb;

pub use rgb::*;
