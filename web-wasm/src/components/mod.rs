pub mod detail_panel;
pub mod location_warning;
pub mod map_view;
pub mod mobile_header;
pub mod sidebar;
pub mod toast;
