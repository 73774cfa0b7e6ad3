pub mod cycle;
pub mod evaluator;
pub mod poller;
pub mod registry;
pub mod state;
pub mod types;

pub use cycle::{WatchContext, run_cycle};
pub use registry::{Instrument, InstrumentRegistry};
pub use state::{AlertBook, AlertState, Outcome};
