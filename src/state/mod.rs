mod pantry;

pub use pantry::{Pantry, RestockAdvisory, format_availability};
