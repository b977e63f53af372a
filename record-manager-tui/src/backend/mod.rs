//!
//! src/backend/mod.rs
//! Backend 层：与 UI 解耦的服务
//!
//! 记录本身只存在内存里（`record-manager-core::RecordForm`），
//! Backend 层目前只负责配置的读写。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（JSON 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         pub trait ConfigService: Send + Sync {
//!             fn load(&self) -> Result<AppConfig>;
//!             fn save(&self, config: &AppConfig) -> Result<()>;
//!         }
//!
//!         LocalConfigService 是默认实现。
//!
//!         存储位置：~/.config/record-manager-tui/config.json
//!
//!         {
//!           "theme": "dark",                      // dark | light
//!           "submitPolicy": "alert-and-proceed"   // alert-and-proceed | block-on-errors
//!         }
//!
//!         文件不存在或无法解析时使用默认配置，不阻止启动。
//!
//!
//!     数据流：
//!         启动时 App::new() 调用 load()
//!             ↓
//!         设置弹窗中切换主题或提交策略
//!             ↓
//!         update/modal.rs 修改 app.config 后调用 App::apply_config()
//!             ↓
//!         ConfigService::save() 写回文件
//!

mod config_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
