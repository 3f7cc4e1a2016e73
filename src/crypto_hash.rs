use serde_json::Value;
use sha2::{Digest, Sha256};

/// Hash a set of values into a lowercase hex SHA-256 digest.
///
/// Every value is rendered as compact JSON (object keys sorted), the
/// renderings are sorted and joined with a single space before hashing.
/// The digest therefore does not depend on the order of `inputs`.
pub fn crypto_hash<'a, I>(inputs: I) -> String
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut parts: Vec<String> = inputs.into_iter().map(Value::to_string).collect();
    parts.sort();

    let mut hasher = Sha256::new();
    hasher.update(parts.join(" ").as_bytes());
    hex::encode(hasher.finalize())
}

/// Variadic form of [`crypto_hash`](crate::crypto_hash::crypto_hash) taking
/// any `Serialize` values.
///
/// # Panics
///
/// Panics if a value cannot be represented as JSON (for example a map with
/// non-string keys), the same way `serde_json::json!` does.
#[macro_export]
macro_rules! crypto_hash {
    ($($value:expr),+ $(,)?) => {
        $crate::crypto_hash::crypto_hash(&[$($crate::serde_json::json!($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::crypto_hash;
    use rand::distributions::Alphanumeric;
    use rand::{Rng, thread_rng};
    use serde_json::json;

    #[test]
    fn generates_sha256_of_the_json_rendering() {
        assert_eq!(
            crypto_hash!("foo"),
            "b2213295d564916f89a6a42455567c87c3f480fcd7a1c15e220f17d7169a790b"
        );
    }

    #[test]
    fn output_is_64_lowercase_hex_chars() {
        let digest = crypto_hash!(1, "two", [3]);
        assert_eq!(digest.len(), 64);
        assert!(
            digest
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn same_hash_regardless_of_argument_order() {
        let abc = crypto_hash!("one", "two", "three");
        assert_eq!(abc, crypto_hash!("three", "one", "two"));
        assert_eq!(abc, crypto_hash!("two", "three", "one"));
    }

    #[test]
    fn order_independence_holds_for_random_mixed_values() {
        let mut rng = thread_rng();
        for _ in 0..32 {
            let text: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(12)
                .map(char::from)
                .collect();
            let a = json!(text);
            let b = json!(rng.r#gen::<u64>());
            let c = json!({ "payload": rng.r#gen::<i32>() });

            let first = crypto_hash([&a, &b, &c]);
            assert_eq!(first, crypto_hash([&c, &a, &b]));
            assert_eq!(first, crypto_hash([&b, &c, &a]));
        }
    }

    #[test]
    fn changes_when_an_object_gains_a_field() {
        let mut foo = json!({});
        let original = crypto_hash([&foo]);
        foo["a"] = json!("a");
        assert_ne!(crypto_hash([&foo]), original);
    }

    #[test]
    fn object_key_order_does_not_matter() {
        let left: serde_json::Value = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();
        let right: serde_json::Value = serde_json::from_str(r#"{"b":2,"a":1}"#).unwrap();
        assert_eq!(crypto_hash([&left]), crypto_hash([&right]));
    }

    #[test]
    fn string_and_number_with_same_digits_differ() {
        assert_ne!(crypto_hash!("7"), crypto_hash!(7));
    }
}
