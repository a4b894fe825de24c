//! # Geographic Position
//!
//! The latitude/longitude value carried by position sentences (GLL, GGA,
//! RMC). The coordinates keep the raw on-wire encoding (`ddmm.mm` for
//! latitude, `dddmm.mm` for longitude) with the hemisphere held
//! separately, exactly as received. Conversions to signed decimal
//! degrees are provided for consumers that want them.

use crate::sentence::{AppendField, Sentence};
use crate::vocabulary::{EastWest, NorthSouth};

/// A latitude/longitude pair in wire encoding.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude as transmitted, `ddmm.mm`
    pub latitude: f64,
    pub north_south: NorthSouth,
    /// Longitude as transmitted, `dddmm.mm`
    pub longitude: f64,
    pub east_west: EastWest,
}

impl Position {
    /// Resets to the all-unknown value.
    pub fn empty(&mut self) {
        *self = Self::default();
    }

    /// Populates the position from four sentence fields: latitude,
    /// hemisphere, longitude, hemisphere.
    pub fn parse(
        &mut self,
        latitude_field: i32,
        north_south_field: i32,
        longitude_field: i32,
        east_west_field: i32,
        sentence: &Sentence,
    ) {
        self.latitude = sentence.double(latitude_field);
        self.north_south = sentence.north_south(north_south_field);
        self.longitude = sentence.double(longitude_field);
        self.east_west = sentence.east_west(east_west_field);
    }

    /// Appends the four position fields to an outgoing sentence.
    pub fn write(&self, sentence: &mut Sentence) {
        sentence
            .append(self.latitude)
            .append(self.north_south)
            .append(self.longitude)
            .append(self.east_west);
    }

    /// Latitude in signed decimal degrees, negative south.
    pub fn latitude_degrees(&self) -> f64 {
        let value = decimal_degrees(self.latitude);
        match self.north_south {
            NorthSouth::South => -value,
            _ => value,
        }
    }

    /// Longitude in signed decimal degrees, negative west.
    pub fn longitude_degrees(&self) -> f64 {
        let value = decimal_degrees(self.longitude);
        match self.east_west {
            EastWest::West => -value,
            _ => value,
        }
    }

    pub fn plain_english(&self) -> String {
        format!(
            "{} {}, {} {}",
            degrees_minutes(self.latitude),
            match self.north_south {
                NorthSouth::North => "North",
                NorthSouth::South => "South",
                NorthSouth::Unknown => "North/South unknown",
            },
            degrees_minutes(self.longitude),
            match self.east_west {
                EastWest::East => "East",
                EastWest::West => "West",
                EastWest::Unknown => "East/West unknown",
            },
        )
    }
}

impl AppendField for Position {
    fn append_to(self, sentence: &mut Sentence) {
        self.write(sentence);
    }
}

fn decimal_degrees(coordinate: f64) -> f64 {
    let degrees = (coordinate / 100.0).trunc();
    let minutes = coordinate - degrees * 100.0;
    degrees + minutes / 60.0
}

fn degrees_minutes(coordinate: f64) -> String {
    let degrees = (coordinate / 100.0).trunc();
    let minutes = coordinate - degrees * 100.0;
    format!("{degrees}\u{b0} {minutes:.2}'")
}
