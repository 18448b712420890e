// 核心基础设施：日志

pub mod logger;

pub use logger::init_logger;
