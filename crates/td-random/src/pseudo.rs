//! Local pseudo-random generation mirroring the remote generators.

use rand::Rng;

use crate::request::{RandomRequest, RequestKind};
use crate::result::Value;

/// Produce the values `req` asks for without touching the network.
///
/// `req` must already be validated: the bounds are ordered and, for
/// strings, the alphabet is non-empty.
pub fn generate<R: Rng>(req: &RandomRequest, rng: &mut R) -> Vec<Value> {
    match req.kind {
        RequestKind::Integers => integers(req.num, req.min, req.max, rng)
            .into_iter()
            .map(Value::Integer)
            .collect(),
        RequestKind::Sequences => sequence(req.min, req.max, rng)
            .into_iter()
            .map(Value::Integer)
            .collect(),
        RequestKind::Strings => strings(req.num, req.len, &req.alphabet(), rng)
            .into_iter()
            .map(Value::Text)
            .collect(),
    }
}

/// `num` independent uniform draws from `[min, max]`.
pub fn integers<R: Rng>(num: u32, min: i64, max: i64, rng: &mut R) -> Vec<i64> {
    (0..num).map(|_| rng.random_range(min..=max)).collect()
}

/// A uniform permutation of `[min, max]`, built by repeatedly drawing a
/// remaining element without replacement.
pub fn sequence<R: Rng>(min: i64, max: i64, rng: &mut R) -> Vec<i64> {
    let mut remaining: Vec<i64> = (min..=max).collect();
    let mut out = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let idx = rng.random_range(0..remaining.len());
        out.push(remaining.swap_remove(idx));
    }
    out
}

/// `num` strings of `len` characters drawn with replacement from `alphabet`.
///
/// There is no uniqueness across strings: a local batch may repeat a string
/// even when the request sets `unique`.
pub fn strings<R: Rng>(num: u32, len: u32, alphabet: &str, rng: &mut R) -> Vec<String> {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return vec![String::new(); num as usize];
    }
    (0..num)
        .map(|_| {
            (0..len)
                .map(|_| chars[rng.random_range(0..chars.len())])
                .collect()
        })
        .collect()
}
