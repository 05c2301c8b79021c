mod rest_profile_row;

pub use rest_profile_row::{RestProfileInsert, RestProfileRow, RestProfileUpdate, TextListColumn};
