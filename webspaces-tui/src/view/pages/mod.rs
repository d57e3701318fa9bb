//! 各视图的渲染函数

pub mod choose_os;
pub mod configs;
pub mod congrats;
pub mod create_root;
pub mod dashboard;
pub mod domains;
pub mod home;
pub mod login;
pub mod not_found;
pub mod ports;
pub mod terminal;
pub mod welcome;
