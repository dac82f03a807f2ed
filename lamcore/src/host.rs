//! Opaque host-side leaves: values and callbacks.
//!
//! Role
//! - [`HostValue`] carries an opaque byte payload produced by host code; the
//!   reduction engine never inspects it.
//! - [`HostFn`] wraps a host-implemented callback `bytes -> Expr` as a
//!   cloneable capability. The callback itself decides whether its input has
//!   the length/shape it expects and fails with
//!   [`LamError::HostContractViolation`] when it does not.
//!
//! Performance
//! - Payloads keep up to 16 bytes inline before spilling to the heap.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::{LamError, LamResult};
use crate::expr::Expr;

/// Inline storage for host-value payloads.
pub type Payload = SmallVec<[u8; 16]>;

/// An atomic value produced by host code, opaque to the reduction engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostValue {
    bytes: Payload,
}

impl HostValue {
    /// Copy `bytes` into a new host value.
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            bytes: SmallVec::from_slice(bytes.as_ref()),
        }
    }

    /// Convenience constructor for the `u64` little-endian payloads used by
    /// the arithmetic examples.
    pub fn from_u64(value: u64) -> Self {
        Self::new(value.to_le_bytes())
    }

    /// Decode a `u64` little-endian payload, if the length matches.
    pub fn to_u64(&self) -> Option<u64> {
        self.bytes
            .as_slice()
            .try_into()
            .ok()
            .map(u64::from_le_bytes)
    }

    /// The raw payload bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

type Callback = Rc<dyn Fn(&[u8]) -> LamResult<Expr>>;

/// A host-implemented function leaf.
///
/// Role
/// - Capability value: cloning copies the reference to the registered
///   callback, not the code, so deep copies of one leaf stay interchangeable.
/// - The engine invokes the callback synchronously and non-reentrantly with
///   a host value's payload; the callback must return a well-formed
///   expression (typically another host value).
///
/// Equality semantics
/// - Two `HostFn` leaves compare equal only if they share the same
///   registered callback. Anything stronger is deliberately unspecified.
#[derive(Clone)]
pub struct HostFn {
    label: &'static str,
    callback: Callback,
}

impl HostFn {
    /// Register a callback under a label used for rendering and logs.
    pub fn new(label: &'static str, callback: impl Fn(&[u8]) -> LamResult<Expr> + 'static) -> Self {
        Self {
            label,
            callback: Rc::new(callback),
        }
    }

    /// The label this callback was registered under.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Invoke the callback with a host value's payload.
    pub fn invoke(&self, payload: &[u8]) -> LamResult<Expr> {
        (self.callback)(payload)
    }
}

impl PartialEq for HostFn {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.callback), Rc::as_ptr(&other.callback))
    }
}

impl Eq for HostFn {}

impl std::fmt::Debug for HostFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostFn")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Decode a `u64` little-endian payload, or fail with the host-contract
/// error a callback should raise for a malformed input.
pub fn decode_u64(label: &'static str, payload: &[u8]) -> LamResult<u64> {
    let bytes: [u8; 8] = payload.try_into().map_err(|_| LamError::HostContractViolation {
        label,
        reason: format!("expected 8 bytes, got {}", payload.len()),
    })?;
    Ok(u64::from_le_bytes(bytes))
}
