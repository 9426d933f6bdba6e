use redis::{FromRedisValue, RedisResult, RedisWrite, ToRedisArgs, Value};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Stores a value in redis as its JSON encoding.
#[repr(transparent)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Serialize> ToRedisArgs for Json<T> {
    fn write_redis_args<W>(&self, out: &mut W)
    where
        W: ?Sized + RedisWrite,
    {
        let encoded = serde_json::to_string(&self.0).expect("Failed to serialize JSON");
        encoded.write_redis_args(out);
    }
}

impl<T: for<'a> Deserialize<'a>> FromRedisValue for Json<T> {
    fn from_redis_value(v: &Value) -> RedisResult<Self> {
        let encoded = Vec::<u8>::from_redis_value(v)?;
        let decoded: T = serde_json::from_slice(&encoded).map_err(redis::RedisError::from)?;
        Ok(Json(decoded))
    }
}

impl<T: Debug> Debug for Json<T> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(fmt)
    }
}

#[cfg(test)]
mod tests {
    use super::Json;
    use redis::{FromRedisValue, ToRedisArgs, Value};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Deserialize, PartialEq, Serialize)]
    struct Entry {
        id: i64,
    }

    #[test]
    fn encodes_as_a_single_json_arg() {
        let args = Json(Entry { id: 7 }).to_redis_args();
        assert_eq!(args, vec![br#"{"id":7}"#.to_vec()]);
    }

    #[test]
    fn decodes_bulk_strings() {
        let value = Value::BulkString(br#"{"id":7}"#.to_vec());
        let Json(entry) = Json::<Entry>::from_redis_value(&value).unwrap();
        assert_eq!(entry, Entry { id: 7 });
    }

    #[test]
    fn rejects_invalid_json() {
        let value = Value::BulkString(b"not json".to_vec());
        assert!(Json::<Entry>::from_redis_value(&value).is_err());
    }
}
