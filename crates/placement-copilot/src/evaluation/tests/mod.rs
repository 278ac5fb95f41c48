mod common;
mod feedback;
mod readiness;
