//! Terminal UI for the CLT Lab distribution simulator
//!
//! Presents a parameter form for five probability distributions and, on
//! demand, renders a two-panel figure: a histogram of the pooled raw draws
//! and a histogram of the sample means with a fitted normal curve, the
//! classic Central Limit Theorem demonstration.

pub mod app;
pub mod commentary;
pub mod components;
pub mod logging;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
pub use state::{AppState, GenerationOutcome};
