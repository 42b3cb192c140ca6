use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::collections::HashSet;
use std::fmt::Display;

/// A single printable coupon code.
///
/// The code carries no internal structure; it is whatever the generating
/// strategy produced. Note that for secure tokens the number of characters is
/// the base64 expansion of the requested byte length, not the length itself.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CouponCode(SmolStr);

impl CouponCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(SmolStr::new(code))
    }

    /// Returns the coupon code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes, which equals the character count for every code the
    /// built-in strategies produce.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for CouponCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CouponCode").field(&self.0).finish()
    }
}

impl Display for CouponCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CouponCode {
    fn from(value: String) -> Self {
        Self(SmolStr::from(value))
    }
}

impl From<&str> for CouponCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for CouponCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for CouponCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CouponCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

/// An ordered collection of distinct coupon codes.
///
/// Codes keep the order in which they were first inserted. Membership is
/// tracked in a hash set so duplicate rejection stays O(1) regardless of how
/// many codes a run asks for.
#[derive(Debug, Clone, Default)]
pub struct CouponSet {
    codes: Vec<CouponCode>,
    seen: HashSet<CouponCode>,
}

impl CouponSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            codes: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Appends `code` unless it is already present.
    ///
    /// Returns `false` and leaves the set untouched for a duplicate.
    pub fn insert(&mut self, code: CouponCode) -> bool {
        if self.seen.contains(&code) {
            return false;
        }
        self.seen.insert(code.clone());
        self.codes.push(code);
        true
    }

    pub fn contains(&self, code: &CouponCode) -> bool {
        self.seen.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CouponCode> {
        self.codes.iter()
    }

    pub fn as_slice(&self) -> &[CouponCode] {
        &self.codes
    }

    pub fn into_vec(self) -> Vec<CouponCode> {
        self.codes
    }
}

impl IntoIterator for CouponSet {
    type Item = CouponCode;
    type IntoIter = std::vec::IntoIter<CouponCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.into_iter()
    }
}

impl<'a> IntoIterator for &'a CouponSet {
    type Item = &'a CouponCode;
    type IntoIter = std::slice::Iter<'a, CouponCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
