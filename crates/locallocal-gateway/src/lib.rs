// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for LocalLocal AI Chat.
//!
//! Serves the browser chat page plus a small JSON API. All request handling
//! is delegated to [`locallocal_router::ChatHandler`], so the gateway holds no
//! state beyond a shared handle to it.

pub mod handlers;
pub mod page;
pub mod server;

pub use handlers::{ChatRequest, ChatResponse, HealthResponse, ModelsResponse};
pub use page::{escape_html, ChatPage};
pub use server::{router, start_server, GatewayState, ServerConfig};
