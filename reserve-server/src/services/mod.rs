//! 服务层 - 跨仓储的业务流程
//!
//! # 服务列表
//!
//! - [`provisioning`] - 桌台批量开通（可预订时间网格复制到每张桌）
//! - [`reservations`] - 预订查询与下单
//! - [`accounts`] - 顾客/餐厅注册与资料修改
//!
//! Handlers that only read or write a single table call the repository
//! directly; anything spanning several tables or a transaction lives here.

pub mod accounts;
pub mod provisioning;
pub mod reservations;

pub use provisioning::provision_tables;
pub use reservations::{create_reservation, distinct_reserving_users, reservations_for_user};
