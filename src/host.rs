// src/host.rs
//! Host-runtime registration shim.
//!
//! Query engines hand scalar functions a per-query memory context and
//! expect results in their own nullable byte-string representation. This
//! module is the only place that knows about either: the core stays on
//! plain slices and `Option<Vec<u8>>`. The adapter surface is kept
//! deliberately narrow — one allocation hook and one nullable mapping.

use crate::udf;

/// Output-buffer allocation hook.
///
/// A real engine implements this over its arena/memory-context so result
/// buffers are accounted against the query; [`HeapContext`] is the
/// general-purpose-allocator stand-in. Returning `None` models allocation
/// failure and surfaces as [`HostValue::Null`], never as a panic.
pub trait MemoryContext {
    fn allocate_output(&mut self, len: usize) -> Option<Vec<u8>>;
}

/// Plain-heap [`MemoryContext`] for hosts without their own arena.
#[derive(Debug, Default)]
pub struct HeapContext;

impl MemoryContext for HeapContext {
    fn allocate_output(&mut self, len: usize) -> Option<Vec<u8>> {
        Some(vec![0u8; len])
    }
}

/// The host's nullable byte-string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostValue {
    Null,
    Bytes(Vec<u8>),
}

impl HostValue {
    pub fn is_null(&self) -> bool {
        matches!(self, HostValue::Null)
    }
}

/// Copy a core result into context-allocated storage.
///
/// Absent results and allocation failures both map to `Null` — the host
/// contract is binary.
pub fn to_nullable(result: Option<Vec<u8>>, ctx: &mut dyn MemoryContext) -> HostValue {
    let Some(bytes) = result else {
        return HostValue::Null;
    };
    match ctx.allocate_output(bytes.len()) {
        // an undersized buffer from the context counts as allocation failure
        Some(mut out) if out.len() == bytes.len() => {
            out.copy_from_slice(&bytes);
            HostValue::Bytes(out)
        }
        _ => HostValue::Null,
    }
}

/// A registered two-argument scalar operator over nullable bytes.
pub struct ScalarFn {
    pub name: &'static str,
    pub eval: fn(&mut dyn MemoryContext, Option<&[u8]>, Option<&[u8]>) -> HostValue,
}

fn eval_encrypt(ctx: &mut dyn MemoryContext, input: Option<&[u8]>, key: Option<&[u8]>) -> HostValue {
    to_nullable(udf::aes_encrypt(input, key), ctx)
}

fn eval_decrypt(ctx: &mut dyn MemoryContext, input: Option<&[u8]>, key: Option<&[u8]>) -> HostValue {
    to_nullable(udf::aes_decrypt(input, key), ctx)
}

/// The operator table a host registers at startup.
pub fn scalar_functions() -> [ScalarFn; 2] {
    [
        ScalarFn {
            name: "aes_encrypt",
            eval: eval_encrypt,
        },
        ScalarFn {
            name: "aes_decrypt",
            eval: eval_decrypt,
        },
    ]
}
