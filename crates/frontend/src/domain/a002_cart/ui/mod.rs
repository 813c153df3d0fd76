pub mod floating_button;
pub mod sidebar;
