use serde::de::DeserializeOwned;

pub fn deserialize<T: DeserializeOwned>(slice: &[u8]) -> Result<T, anyhow::Error> {
    let value = serde_json::from_slice(slice)?;
    Ok(value)
}
