// SPDX-License-Identifier: MPL-2.0
//! Messages consumed by `App::update`.

/// The toast only ever reacts to its own timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The display duration elapsed.
    Expired,
}
