// Copyright (C) Microsoft Corporation. All rights reserved.

//! Behaviour slots of cipher and digest descriptors.
//!
//! A descriptor pairs fixed algorithm properties with a value implementing
//! one of these traits. The dispatch contexts call through the traits and
//! store the backend's private state as the associated type, so no state is
//! sized or cast by hand.
//!
//! # Slots
//!
//! | Cipher      | Digest      |
//! |-------------|-------------|
//! | `init`      | `init`      |
//! | `do_cipher` | `update`    |
//! | `cleanup`   | `finalize`  |
//! |             | `cleanup_slot` (optional) |

mod cipher_method;
mod digest_method;

pub use cipher_method::*;
pub use digest_method::*;

use super::*;
