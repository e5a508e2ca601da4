pub mod api_error;
pub mod api_utils;
pub mod icons;
pub mod modal;
