pub mod api_utils;
pub mod icons;
pub mod keys;
pub mod scroll;
pub mod toast;
