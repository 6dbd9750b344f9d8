/**
 * 详细中文注释 - 计数核心库入口
 *
 * 说明
 * - count: 纯函数 count(containers, per_container)，结果为两者乘积
 * - session: 按行读取命令的文本协议，对外暴露 count 能力
 */
pub mod count;
pub mod session;

pub use crate::count::{checked_count, count, Load, ParseLoadError};
