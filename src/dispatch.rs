// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Call targets for the dispatch-cost fixture.
//!
//! Every entry point returns the same constant; the fixture measures the
//! call, not the body. The `#[inline(never)]` attributes keep the compiler
//! from collapsing the variants into each other.

/// The constant every variant returns.
pub const ANSWER: i32 = 42;

/// Trait for the statically- and dynamically-dispatched variants.
pub trait Respond {
    fn respond(&self) -> i32;
}

/// Concrete call target.
pub struct Responder;

impl Responder {
    /// Associated function, no receiver.
    #[inline(never)]
    pub fn associated() -> i32 {
        ANSWER
    }

    /// Inherent method on a concrete receiver.
    #[inline(never)]
    pub fn inherent(&self) -> i32 {
        ANSWER
    }
}

impl Respond for Responder {
    #[inline(never)]
    fn respond(&self) -> i32 {
        ANSWER
    }
}

/// Monomorphized trait call: resolved at compile time.
#[inline(never)]
pub fn respond_generic<R: Respond>(responder: &R) -> i32 {
    responder.respond()
}

/// Virtual trait call through a vtable.
#[inline(never)]
pub fn respond_dyn(responder: &dyn Respond) -> i32 {
    responder.respond()
}
