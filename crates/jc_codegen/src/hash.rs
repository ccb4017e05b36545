use sha2::{Digest, Sha256};

/// Length of the hashes embedded in generated names.
pub const HASH_LENGTH: usize = 16;

/// Returns the first [`HASH_LENGTH`] lowercase hex digits of the SHA-256 of
/// `input`. Used to derive stable, collision-resistant names.
///
/// ```
/// assert_eq!(jc_codegen::hash::hash_string("default"), "37a8eec1ce19687d");
/// ```
pub fn hash_string(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = hex::encode(digest);
    hex.truncate(HASH_LENGTH);
    hex
}

#[cfg(test)]
mod tests {
    use super::hash_string;

    #[test]
    fn stable_prefix() {
        assert_eq!(hash_string("com.app.two"), "daf38ee7e8ee56f8");
        assert_eq!(hash_string("com.app.net.Response"), "3913e283578709fa");
        assert_eq!(hash_string("com.app.two").len(), 16);
    }
}
