//! Selection constraints backed by form-like controls.
//!
//! Both constraints keep the raw text of their width/height fields next to the
//! selected mode, because the fields can hold anything the user typed. The
//! typed value ([`Ratio`](crate::types::Ratio) or
//! [`SizeTarget`](crate::types::SizeTarget)) only exists once the fields parse.
//!
//! - `ratio` - free vs. fixed aspect ratio of the selection
//! - `size` - original vs. user-defined output size of the derivative

mod ratio;
mod size;

pub use ratio::{RatioConstraint, RatioType};
pub use size::{SizeConstraint, SizeType};
