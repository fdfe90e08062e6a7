use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use colorsys_convert::Triple;

use crate::error::ColorError;

/// Names of the RGB channels, in order.
pub const CHANNELS: [&str; 3] = ["red", "green", "blue"];

/// An RGB color as a plain record with named fields.
///
/// Every color type compares equal to a record holding the same channels.
/// With the `serde` feature the record (de)serializes as
/// `{"red": .., "green": .., "blue": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbRecord {
    /// The red channel.
    pub red: f64,
    /// The green channel.
    pub green: f64,
    /// The blue channel.
    pub blue: f64,
}

impl RgbRecord {
    /// Create a new record from its channels.
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// The channels as an RGB triple.
    pub fn to_array(self) -> Triple {
        [self.red, self.green, self.blue]
    }
}

impl From<Triple> for RgbRecord {
    fn from([red, green, blue]: Triple) -> Self {
        Self { red, green, blue }
    }
}

impl From<RgbRecord> for Triple {
    fn from(record: RgbRecord) -> Self {
        record.to_array()
    }
}

/// Read the three RGB channels out of a map keyed by channel name.
pub(crate) fn rgb_from_map<K, S>(map: &HashMap<K, f64, S>) -> Result<Triple, ColorError>
where
    K: Borrow<str> + Eq + Hash,
    S: BuildHasher,
{
    let mut rgb = [0.0; 3];
    for (value, name) in rgb.iter_mut().zip(CHANNELS) {
        *value = *map.get(name).ok_or_else(|| {
            log::debug!("record has no '{}' channel", name);
            ColorError::MissingChannel(name)
        })?;
    }
    Ok(rgb)
}

/// True if `map` holds exactly the three RGB channels with the values of `rgb`.
pub(crate) fn map_matches<K, S>(rgb: Triple, map: &HashMap<K, f64, S>) -> bool
where
    K: Borrow<str> + Eq + Hash,
    S: BuildHasher,
{
    map.len() == CHANNELS.len() && rgb_from_map(map).is_ok_and(|other| other == rgb)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{map_matches, rgb_from_map, RgbRecord};
    use crate::ColorError;

    #[test]
    fn read_channels_from_map() -> Result<(), ColorError> {
        let map = HashMap::from([("blue", 0.25), ("red", 1.0), ("green", 0.5)]);
        assert_eq!(rgb_from_map(&map)?, [1.0, 0.5, 0.25]);
        Ok(())
    }

    #[test]
    fn missing_channel() {
        let map = HashMap::from([("red".to_string(), 1.0), ("green".to_string(), 0.5)]);
        assert_eq!(rgb_from_map(&map), Err(ColorError::MissingChannel("blue")));
    }

    #[test]
    fn extra_keys_do_not_match() {
        let map = HashMap::from([("red", 1.0), ("green", 0.0), ("blue", 1.0), ("alpha", 1.0)]);
        assert!(!map_matches([1.0, 0.0, 1.0], &map));

        let map = HashMap::from([("red", 1.0), ("green", 0.0), ("blue", 1.0)]);
        assert!(map_matches([1.0, 0.0, 1.0], &map));
        assert!(!map_matches([1.0, 0.0, 0.0], &map));
    }

    #[test]
    fn record_from_triple() {
        let record = RgbRecord::from([0.1, 0.2, 0.3]);
        assert_eq!(record, RgbRecord::new(0.1, 0.2, 0.3));
        assert_eq!(record.to_array(), [0.1, 0.2, 0.3]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn record_serde() -> Result<(), serde_json::Error> {
        let record: RgbRecord = serde_json::from_str(r#"{"red": 1, "green": 0, "blue": 0.5}"#)?;
        assert_eq!(record, RgbRecord::new(1.0, 0.0, 0.5));

        let json = serde_json::to_string(&record)?;
        assert_eq!(serde_json::from_str::<RgbRecord>(&json)?, record);
        Ok(())
    }
}
