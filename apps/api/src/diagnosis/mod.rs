// Diagnosis: category scoring for the radar chart and value-card unlocking.
// Pure functions over the injected catalog; handlers are the only async code.

pub mod handlers;
pub mod radar;
pub mod values;
