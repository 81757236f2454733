pub mod clock;
pub mod debounce;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::Debounced;
