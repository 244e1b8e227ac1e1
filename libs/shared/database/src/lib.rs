pub mod state;
pub mod store;

pub use state::{HospitalState, ViewerState};
pub use store::DocumentStore;
