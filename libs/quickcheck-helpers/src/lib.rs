// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2019 Joyent, Inc.
// Copyright 2026 Edgecast Cloud LLC.

/// This module provides helper functions that generate pseudorandom
/// parameter names and values.
pub mod random {
    use quickcheck::{Arbitrary, Gen};
    use serde_json::Value;

    /// Generate a random [`String`] of size `len` containing only lowercase
    /// alphanumeric characters (a-z, 0-9) using the provided generator `g`.
    pub fn string(g: &mut Gen, len: usize) -> String {
        (0..len)
            .map(|_| {
                let c = u8::arbitrary(g);
                match c % 36 {
                    n @ 0..=25 => (b'a' + n) as char,
                    n => (b'0' + (n - 26)) as char,
                }
            })
            .collect()
    }

    /// Generate a camelCase field name of `len` characters (at least one).
    ///
    /// Names always start with a lowercase letter and never begin with `_`
    /// or `:`, so they cannot collide with the response-shaping flags or be
    /// mistaken for the symbolic key form.
    pub fn field_name(g: &mut Gen, len: usize) -> String {
        let first = (b'a' + u8::arbitrary(g) % 26) as char;
        let rest: String = string(g, len.saturating_sub(1))
            .chars()
            .map(|c| {
                if bool::arbitrary(g) {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        format!("{first}{rest}")
    }

    /// Generate a JSON scalar: a string, a boolean or an integer.
    pub fn scalar(g: &mut Gen) -> Value {
        match u8::arbitrary(g) % 3 {
            0 => {
                let len = usize::arbitrary(g) % 16;
                Value::String(string(g, len))
            }
            1 => Value::Bool(bool::arbitrary(g)),
            _ => Value::from(i64::arbitrary(g)),
        }
    }

    /// Generate a small JSON object suitable as a request body.
    pub fn document(g: &mut Gen) -> Value {
        let entries = usize::arbitrary(g) % 4;
        let map = (0..entries)
            .map(|_| (field_name(g, 6), scalar(g)))
            .collect();
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::random;
    use quickcheck::Gen;

    #[test]
    fn field_names_are_well_formed() {
        let mut g = Gen::new(32);
        for len in 1..20 {
            let name = random::field_name(&mut g, len);
            assert_eq!(name.len(), len);
            assert!(name.starts_with(|c: char| c.is_ascii_lowercase()));
            assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn zero_length_name_still_has_a_letter() {
        let mut g = Gen::new(8);
        assert_eq!(random::field_name(&mut g, 0).len(), 1);
    }
}
