pub mod markers;
pub mod plan;
pub mod primitives;

pub use markers::*;
pub use plan::{is_section_padding, rule_for, trim_section, Rule, PLAN};
pub use primitives::{after, before, between, slice_after, slice_before, slice_between, Slice};
