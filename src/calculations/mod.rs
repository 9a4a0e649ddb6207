pub mod consolidation;
pub mod critical_path;
pub mod forward_pass;
