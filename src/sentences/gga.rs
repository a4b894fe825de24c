use time::OffsetDateTime;

use crate::{
    Error,
    position::Position,
    sentence::Sentence,
    sentences::{Response, checksum_gate},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///         1         2       3 4        5 6 7  8   9   10 11  12 13  14
///         |         |       | |        | | |  |   |   |  |   |  |   |
///  $--GGA,hhmmss.ss,llll.ll,a,yyyyy.yy,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GGA {
    /// Fix time token as transmitted, `hhmmss[.ss]`
    pub utc_time: String,
    /// Fix time anchored to the current UTC date
    pub time: Option<OffsetDateTime>,
    pub position: Position,
    /// 0 no fix, 1 GPS fix, 2 differential fix, higher values per later
    /// protocol revisions
    pub fix_quality: i32,
    pub number_of_satellites: i32,
    pub horizontal_dilution: f64,
    pub antenna_altitude_meters: f64,
    pub geoidal_separation_meters: f64,
    /// Seconds since the last differential update, 0 when unused
    pub age_of_differential_seconds: f64,
    pub differential_station_id: i32,
}

impl Response for GGA {
    fn mnemonic(&self) -> &'static str {
        "GGA"
    }

    fn empty(&mut self) {
        *self = Self::default();
    }

    fn parse(&mut self, sentence: &Sentence) -> Result<(), Error> {
        checksum_gate(sentence, 15)?;

        self.utc_time = sentence.field(1).to_owned();
        self.time = Some(sentence.time(1));
        self.position.parse(2, 3, 4, 5, sentence);
        self.fix_quality = sentence.integer(6);
        self.number_of_satellites = sentence.integer(7);
        self.horizontal_dilution = sentence.double(8);
        self.antenna_altitude_meters = sentence.double(9);
        self.geoidal_separation_meters = sentence.double(11);
        self.age_of_differential_seconds = sentence.double(13);
        self.differential_station_id = sentence.integer(14);

        Ok(())
    }

    fn write(&self, sentence: &mut Sentence) {
        self.write_header(sentence);
        sentence
            .append(self.utc_time.as_str())
            .append(self.position)
            .append(self.fix_quality)
            .append(self.number_of_satellites)
            .append(self.horizontal_dilution)
            .append(self.antenna_altitude_meters)
            .append("M")
            .append(self.geoidal_separation_meters)
            .append("M")
            .append(self.age_of_differential_seconds)
            .append(self.differential_station_id);
        sentence.finish();
    }

    fn plain_english(&self) -> String {
        format!(
            "At {} UTC you were at {}, {:.1} meters above sea level, \
             using {} satellites.",
            self.utc_time,
            self.position.plain_english(),
            self.antenna_altitude_meters,
            self.number_of_satellites
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{EastWest, NorthSouth};

    #[test]
    fn test_parse() {
        let sentence = Sentence::from(
            "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n",
        );
        let mut gga = GGA::default();

        assert!(gga.parse(&sentence).is_ok());
        assert_eq!(gga.utc_time, "123519");
        assert_eq!(gga.position.latitude, 4807.038);
        assert_eq!(gga.position.north_south, NorthSouth::North);
        assert_eq!(gga.position.longitude, 1131.0);
        assert_eq!(gga.position.east_west, EastWest::East);
        assert_eq!(gga.fix_quality, 1);
        assert_eq!(gga.number_of_satellites, 8);
        assert_eq!(gga.horizontal_dilution, 0.9);
        assert_eq!(gga.antenna_altitude_meters, 545.4);
        assert_eq!(gga.geoidal_separation_meters, 46.9);
        assert_eq!(gga.age_of_differential_seconds, 0.0);
        assert_eq!(gga.differential_station_id, 0);
    }

    #[test]
    fn test_write_round_trip() {
        let gga = GGA {
            utc_time: "123519".to_owned(),
            time: None,
            position: Position {
                latitude: 4807.038,
                north_south: NorthSouth::North,
                longitude: 1131.0,
                east_west: EastWest::East,
            },
            fix_quality: 1,
            number_of_satellites: 8,
            horizontal_dilution: 0.9,
            antenna_altitude_meters: 545.4,
            geoidal_separation_meters: 46.9,
            age_of_differential_seconds: 0.0,
            differential_station_id: 0,
        };

        let mut sentence = Sentence::new();
        gga.write(&mut sentence);

        assert!(sentence.as_str().starts_with("$GPGGA,123519,4807.038,N,"));
        assert!(sentence.as_str().ends_with("\r\n"));
        assert_eq!(sentence.number_of_fields(), 14);

        let mut parsed = GGA::default();
        assert!(parsed.parse(&sentence).is_ok());
        assert_eq!(parsed.position, gga.position);
        assert_eq!(parsed.fix_quality, gga.fix_quality);
        assert_eq!(parsed.number_of_satellites, gga.number_of_satellites);
        assert_eq!(parsed.antenna_altitude_meters, gga.antenna_altitude_meters);
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let sentence = Sentence::from(
            "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*00\r\n",
        );
        let mut gga = GGA::default();

        assert!(matches!(
            gga.parse(&sentence),
            Err(Error::ChecksumMismatch { .. })
        ));
        assert_eq!(gga, GGA::default());
    }
}
