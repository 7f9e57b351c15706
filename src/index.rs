//! Building a map from a sequence, keyed by a derived value.

use crate::error::{RemoldError, Result};
use crate::map::Map;
use crate::value::{Key, Value};

/// Build a map keying each element under `key_fn(element)`.
///
/// Later elements overwrite earlier ones when their keys collide. Panics
/// when the key function returns `None` for some element; [`try_index_by`]
/// reports the element's index as an error instead.
///
/// # Example
///
/// ```rust
/// use remold::{index_by, Key, Value};
///
/// let users = vec![
///     Value::from(serde_json::json!({"id": "ada", "role": "admin"})),
///     Value::from(serde_json::json!({"id": "lin", "role": "dev"})),
/// ];
///
/// let by_id = index_by(&users, |user| {
///     let id = user.as_map()?.get(&Key::str("id"))?.as_scalar()?;
///     Some(Key::str(id.to_string()))
/// });
///
/// assert_eq!(by_id.len(), 2);
/// assert!(by_id.get(&Key::str("ada")).is_some());
/// ```
pub fn index_by<F>(items: &[Value], key_fn: F) -> Map
where
    F: FnMut(&Value) -> Option<Key>,
{
    match try_index_by(items, key_fn) {
        Ok(map) => map,
        Err(err) => panic!("{}", err),
    }
}

/// Build a map keying each element under `key_fn(element)`.
///
/// Fails with `KeyFn` naming the first element the key function rejected.
pub fn try_index_by<F>(items: &[Value], mut key_fn: F) -> Result<Map>
where
    F: FnMut(&Value) -> Option<Key>,
{
    let mut out = Map::new();
    for (index, item) in items.iter().enumerate() {
        let key = key_fn(item).ok_or(RemoldError::KeyFn { index })?;
        out.insert(key, item.clone());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, role: &str) -> Value {
        Value::from(serde_json::json!({"id": id, "role": role}))
    }

    fn id_key(value: &Value) -> Option<Key> {
        let id = value.as_map()?.get(&Key::str("id"))?.as_scalar()?;
        Some(Key::str(id.to_string()))
    }

    #[test]
    fn test_index_by_field() {
        let users = vec![user("ada", "admin"), user("lin", "dev")];
        let by_id = index_by(&users, id_key);

        assert_eq!(by_id.len(), 2);
        assert_eq!(by_id.get(&Key::str("lin")), Some(&users[1]));
    }

    #[test]
    fn test_index_by_collision_last_wins() {
        let users = vec![user("ada", "admin"), user("ada", "dev")];
        let by_id = index_by(&users, id_key);

        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id.get(&Key::str("ada")), Some(&users[1]));
    }

    #[test]
    fn test_index_by_stateful_key_fn() {
        let items = vec![Value::from("a"), Value::from("b")];
        let mut n = 0_i64;
        let by_pos = index_by(&items, |_| {
            n += 1;
            Some(Key::Int(n))
        });

        assert_eq!(by_pos.get(&Key::Int(2)), Some(&Value::from("b")));
    }

    #[test]
    fn test_try_index_by_reports_failing_index() {
        let items = vec![user("ada", "admin"), Value::from(1_i64)];
        let err = try_index_by(&items, id_key).unwrap_err();

        assert_eq!(err, RemoldError::KeyFn { index: 1 });
        assert_eq!(err.to_string(), "Key function failed for element at index 1");
    }

    #[test]
    fn test_index_by_empty_slice() {
        let by_id = index_by(&[], id_key);
        assert!(by_id.is_empty());
    }

    #[test]
    #[should_panic(expected = "Key function failed")]
    fn test_index_by_panics_on_rejected_element() {
        index_by(&[Value::null()], id_key);
    }
}
