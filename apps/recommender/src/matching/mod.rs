// Career matching: skill profile vs. the career-path table.

pub mod careers;
pub mod gaps;
