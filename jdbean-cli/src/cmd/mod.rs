pub mod check;
pub mod cookie_help;
pub mod run;
pub mod set_cookies;
