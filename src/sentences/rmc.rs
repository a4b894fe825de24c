use time::{Date, OffsetDateTime};

use crate::{
    Error,
    position::Position,
    sentence::Sentence,
    sentences::{Response, checksum_gate},
    vocabulary::{EastWest, Status},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6 7   8   9    10  11
///         |         | |       | |        | |   |   |    |   |
///  $--RMC,hhmmss.ss,A,llll.ll,a,yyyyy.yy,a,x.x,x.x,ddmmyy,x.x,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RMC {
    /// Fix time token as transmitted, `hhmmss[.ss]`
    pub utc_time: String,
    /// Fix time anchored to the current UTC date
    pub time: Option<OffsetDateTime>,
    pub is_data_valid: Status,
    pub position: Position,
    pub speed_over_ground_knots: f64,
    pub track_made_good_degrees_true: f64,
    /// Date token as transmitted, `ddmmyy`
    pub utc_date: String,
    pub date: Option<Date>,
    pub magnetic_variation_degrees: f64,
    pub magnetic_variation_direction: EastWest,
}

impl Response for RMC {
    fn mnemonic(&self) -> &'static str {
        "RMC"
    }

    fn empty(&mut self) {
        *self = Self::default();
    }

    fn parse(&mut self, sentence: &Sentence) -> Result<(), Error> {
        checksum_gate(sentence, 12)?;

        self.utc_time = sentence.field(1).to_owned();
        self.time = Some(sentence.time(1));
        self.is_data_valid = sentence.status(2);
        self.position.parse(3, 4, 5, 6, sentence);
        self.speed_over_ground_knots = sentence.double(7);
        self.track_made_good_degrees_true = sentence.double(8);
        self.utc_date = sentence.field(9).to_owned();
        self.date = sentence.date(9);
        self.magnetic_variation_degrees = sentence.double(10);
        self.magnetic_variation_direction = sentence.east_west(11);

        Ok(())
    }

    fn write(&self, sentence: &mut Sentence) {
        self.write_header(sentence);
        sentence
            .append(self.utc_time.as_str())
            .append(self.is_data_valid)
            .append(self.position)
            .append(self.speed_over_ground_knots)
            .append(self.track_made_good_degrees_true)
            .append(self.utc_date.as_str())
            .append(self.magnetic_variation_degrees)
            .append(self.magnetic_variation_direction);
        sentence.finish();
    }

    fn plain_english(&self) -> String {
        format!(
            "At {} UTC you were at {}, making {:.1} knots on a true track of {:.1} degrees.",
            self.utc_time,
            self.position.plain_english(),
            self.speed_over_ground_knots,
            self.track_made_good_degrees_true
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::NorthSouth;

    #[test]
    fn test_parse() {
        let sentence = Sentence::from(
            "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68\r\n",
        );
        let mut rmc = RMC::default();

        assert!(rmc.parse(&sentence).is_ok());
        assert_eq!(rmc.utc_time, "225446");
        assert_eq!(rmc.is_data_valid, Status::Valid);
        assert_eq!(rmc.position.latitude, 4916.45);
        assert_eq!(rmc.position.north_south, NorthSouth::North);
        assert_eq!(rmc.speed_over_ground_knots, 0.5);
        assert_eq!(rmc.track_made_good_degrees_true, 54.7);
        assert_eq!(rmc.utc_date, "191194");
        assert_eq!(rmc.magnetic_variation_degrees, 20.3);
        assert_eq!(rmc.magnetic_variation_direction, EastWest::East);

        let date = rmc.date.unwrap();
        assert_eq!((date.day(), date.month() as u8, date.year()), (19, 11, 1994));
    }

    #[test]
    fn test_write_round_trip() {
        let rmc = RMC {
            utc_time: "225446".to_owned(),
            time: None,
            is_data_valid: Status::Valid,
            position: Position {
                latitude: 4916.45,
                north_south: NorthSouth::North,
                longitude: 12311.12,
                east_west: EastWest::West,
            },
            speed_over_ground_knots: 0.5,
            track_made_good_degrees_true: 54.7,
            utc_date: "191194".to_owned(),
            date: None,
            magnetic_variation_degrees: 20.3,
            magnetic_variation_direction: EastWest::East,
        };

        let mut sentence = Sentence::new();
        rmc.write(&mut sentence);

        assert!(sentence.as_str().starts_with("$GPRMC,225446,A,4916.450,N,"));
        assert_eq!(sentence.number_of_fields(), 11);

        let mut parsed = RMC::default();
        assert!(parsed.parse(&sentence).is_ok());
        assert_eq!(parsed.position, rmc.position);
        assert_eq!(parsed.speed_over_ground_knots, rmc.speed_over_ground_knots);
        assert_eq!(parsed.utc_date, rmc.utc_date);
        assert_eq!(
            parsed.magnetic_variation_direction,
            rmc.magnetic_variation_direction
        );
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let sentence = Sentence::from(
            "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*00\r\n",
        );
        let mut rmc = RMC::default();

        assert!(matches!(
            rmc.parse(&sentence),
            Err(Error::ChecksumMismatch { .. })
        ));
        assert_eq!(rmc, RMC::default());
    }
}
