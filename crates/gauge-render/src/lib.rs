//! JSONL, JSON, and human-readable output rendering.

mod human;
mod jsonl;

pub use human::HumanWriter;
pub use jsonl::{FORMAT_VERSION, JsonlWriter, read_requests};
