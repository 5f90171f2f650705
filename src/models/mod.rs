pub mod enums;
pub mod group;

pub use enums::{GroupCategory, GroupPrivacy};
pub use group::{GroupInput, SanitizedGroup};
