pub mod admin_login;
pub mod admin_panel;
pub mod lead_form;
pub mod spin_button;
pub mod wheel_canvas;
pub mod win_modal;
