pub mod analysis_types;
pub mod history_types;
pub mod verdict_types;
