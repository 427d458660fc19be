pub mod creation;
pub mod cut;
pub mod offset;
pub mod query;
