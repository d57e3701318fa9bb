//!
//! src/view/mod.rs
//! View 层：把 Model 渲染成终端画面
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!     src/view/mod.rs
//!         mod layout;         // 标题栏 + （外壳）+ 路由视图 + 状态栏 + 弹窗
//!         mod registry;       // ViewId → ViewDef（标题 + 渲染函数）
//!         mod components;     // 导航外壳、状态栏、弹窗、表单
//!         mod pages;          // 每个视图一个文件
//!         pub mod theme;      // 颜色与样式
//!
//!     渲染流程：
//!         layout::render
//!             ↓ app.route.view
//!         registry.resolve(view) → ViewDef
//!             ↓
//!         (def.render)(app, frame, inner)
//!
//!     外壳只在 `App::shell_visible()` 时出现（已登录且视图声明了外壳）。
//!

mod components;
mod layout;
mod pages;
mod registry;
pub mod theme;

pub use layout::render;
pub use registry::{Registry, build_registry};
