// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Losant REST Parameter Binding
//!
//! Every Losant REST action takes a loosely-typed parameter map and turns it
//! into one HTTP request. This crate holds the single engine that does that
//! for all of them:
//!
//! - [`Params`] accepts parameter names in either of two key forms (plain
//!   text or symbolic) and resolves both to the same field
//! - [`binder::bind`] checks required fields, seeds defaults and routes every
//!   supplied value into the path, query, header or body bucket named by the
//!   action's [`FieldDescriptor`] table
//! - [`assembler::assemble`] substitutes path placeholders and produces an
//!   immutable [`RequestDescriptor`]
//!
//! An [`Action`] ties a method verb and path template to a static field
//! table, so each remote operation is pure data.
//!
//! # Example
//!
//! ```
//! use losant_binding::{Action, FieldDescriptor, Method, params};
//!
//! static GET_THING: Action = Action::new(
//!     "things",
//!     "get",
//!     Method::Get,
//!     "/things/{id}",
//!     &[FieldDescriptor::path("id")],
//! );
//!
//! let request = GET_THING.build(&params! { "id" => "abc" }).unwrap();
//! assert_eq!(request.path(), "/things/abc");
//! assert_eq!(request.query()["_links"], true);
//! ```
//!
//! No I/O happens here. Sending a [`RequestDescriptor`] (URL encoding,
//! authentication, retries, response decoding) is the transport's job.

pub mod action;
pub mod assembler;
pub mod binder;
pub mod error;
pub mod field;
pub mod params;
pub mod request;

pub use action::Action;
pub use binder::Bound;
pub use error::{BindError, MalformedFieldTable};
pub use field::{
    ACTIONS_FLAG, DOMAIN_HEADER, DOMAIN_SCOPE, EMBEDDED_FLAG, FieldDefault, FieldDescriptor,
    LINKS_FLAG, Location, RESPONSE_SHAPING,
};
pub use params::{ParamKey, Params};
pub use request::{Method, PathPart, RequestDescriptor, render_value};

#[doc(hidden)]
pub use serde_json as __json;

/// Build a [`Params`] map.
///
/// Keys are anything convertible into a [`ParamKey`] (a `&str` is the plain
/// text form); values go through `serde_json::json!`, so nested documents can
/// be written inline.
///
/// ```
/// use losant_binding::{ParamKey, params};
///
/// let p = params! {
///     "applicationId" => "5b9b1a1f",
///     ParamKey::symbol("device") => { "name": "sensor" },
///     "_embedded" => false,
/// };
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($key:expr => $value:tt),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(
            params.insert($key, $crate::__json::json!($value));
        )+
        params
    }};
}
