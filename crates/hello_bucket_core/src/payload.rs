use uuid::Uuid;

pub const HELLO_WORLD_PAYLOAD: &[u8] = b"Hello World";

/// Generates the key for one write. Keys are never reused across invocations.
pub fn new_object_key() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_the_literal_greeting() {
        assert_eq!(std::str::from_utf8(HELLO_WORLD_PAYLOAD), Ok("Hello World"));
    }

    #[test]
    fn object_keys_are_fresh_v4_uuids() {
        let first = new_object_key();
        let second = new_object_key();

        let parsed = Uuid::parse_str(&first).expect("key should be a uuid");
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(first, parsed.hyphenated().to_string());
        assert_ne!(first, second);
    }
}
