pub mod crops;
pub mod risk;
pub mod weather;

pub use crops::*;
pub use risk::*;
pub use weather::*;
