pub mod agent;
pub mod ask;
pub mod chart;
pub mod exec;
pub mod objects;
