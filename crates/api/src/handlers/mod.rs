pub mod ai;
pub mod project;
pub mod task;
