pub mod chart;
pub mod estimate;
pub mod milestones;
