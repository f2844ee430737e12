//! # tessera-client
//!
//! Tessera 数据库的 Rust 客户端核心：请求执行与响应分类。
//!
//! Rust driver core for the Tessera database HTTP API: request execution
//! and response classification.
//!
//! ## Overview
//!
//! This crate turns already-constructed query expressions into network
//! requests, interprets the raw responses, and converts failures into a
//! precise, typed error taxonomy. Query semantics live in expression
//! builders outside this crate; results come back as plain
//! [`serde_json::Value`] trees for the layer above to interpret.
//!
//! ## Key Features
//!
//! - **Single entry point**: [`Client`] exposes [`query`](Client::query),
//!   [`query_batch`](Client::query_batch), and [`ping`](Client::ping)
//! - **Batching**: many expressions travel as one wire request, results come
//!   back in input order
//! - **Typed failures**: every non-success status maps onto a closed set of
//!   [`Error`] variants carrying the full [`QueryErrorResponse`]
//! - **Stateless calls**: a client holds only immutable configuration and is
//!   safe to share across tasks
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tessera_client::{ClientBuilder, Expr};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> tessera_client::Result<()> {
//!     let client = ClientBuilder::new("your-secret")
//!         .host("db.tessera.io")
//!         .build()?;
//!
//!     let user = client
//!         .query(&Expr::from_json(json!({"get": {"collection": "users", "id": "7"}})))
//!         .await?;
//!     println!("{user}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client implementation, builder, request execution |
//! | [`expr`] | Opaque query expressions and their wire form |
//! | [`transport`] | Network transport seam and the reqwest implementation |
//! | [`error`] | Error taxonomy and failure payloads |

pub mod client;
pub mod error;
pub mod expr;
pub mod transport;

mod wire;

// Re-export main types for convenience
pub use client::{Client, ClientBuilder};
pub use error::{Error, PathSegment, QueryError, QueryErrorResponse};
pub use expr::Expr;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
