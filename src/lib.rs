//! Assessment Engine - 课程管理平台互评考核引擎
//!
//! 基于 Actix Web 构建的内部考核服务：题目建模、自动评分、
//! 评分分配、提交生命周期与结果汇总。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 网关身份中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `scoring`: 纯函数评分引擎
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod scoring;
pub mod services;
pub mod storage;
pub mod utils;
