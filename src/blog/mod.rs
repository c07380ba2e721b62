//! Blog service operation set.
//!
//! [`endpoints`] holds one static descriptor per remote operation;
//! [`BlogServiceProxy`] exposes each of them as a typed async method.

pub mod endpoints;
mod proxy;

pub use proxy::BlogServiceProxy;
