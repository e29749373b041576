// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core rules with no GUI toolkit dependency.
//!
//! # Modules
//!
//! - [`toast`]: Toast request validation ([`ToastRequest`](toast::ToastRequest),
//!   [`HexColor`](toast::HexColor), [`Position`](toast::Position)) and window
//!   geometry ([`Geometry`](toast::Geometry))

pub mod toast;
