#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum InvalidApiKeyError {
    #[error("invalid length: expected 32 characters, got {0}")]
    InvalidLength(usize),
    #[error("bad byte: expected binary ascii for lowercase hex, got u8 of {0}")]
    BadCharacter(u8),
}

/// A Last.fm API key: thirty-two lowercase hexadecimal ASCII characters.
#[derive(Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct ApiKey([u8; Self::LENGTH]);

impl ApiKey {
    pub const LENGTH: usize = 32;

    pub const fn new(str: &str) -> Result<Self, InvalidApiKeyError> {
        let bytes = str.as_bytes();
        if bytes.len() != Self::LENGTH {
            return Err(InvalidApiKeyError::InvalidLength(bytes.len()));
        }
        let mut key = [0u8; Self::LENGTH];
        let mut i = 0;
        while i != Self::LENGTH {
            let byte = bytes[i];
            if !matches!(byte, b'0'..=b'9' | b'a'..=b'f') {
                return Err(InvalidApiKeyError::BadCharacter(byte));
            }
            key[i] = byte;
            i += 1;
        }
        Ok(Self(key))
    }

    pub const fn as_str(&self) -> &str {
        unsafe { core::str::from_utf8_unchecked(&self.0) }
    }
}

impl core::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl core::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::ser::Serialize for ApiKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::de::Deserialize<'de> for ApiKey {
    fn deserialize<D>(deserializer: D) -> Result<ApiKey, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = ApiKey;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a thirty-two character string of lowercase hex characters")
            }

            fn visit_str<E>(self, str: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match Self::Value::new(str) {
                    Ok(value) => Ok(value),
                    Err(error) => Err(E::custom(error)),
                }
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
