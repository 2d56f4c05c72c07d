pub mod detector_client;
pub mod history;
pub mod media;
pub mod verdict;
pub mod workflow;
