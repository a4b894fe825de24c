use crate::{
    Error,
    sentence::Sentence,
    sentences::{Response, checksum_gate},
};

/// VTG - Track Made Good and Ground Speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct VTG {
    pub track_degrees_true: f64,
    pub track_degrees_magnetic: f64,
    pub speed_knots: f64,
    pub speed_kilometers_per_hour: f64,
}

impl Response for VTG {
    fn mnemonic(&self) -> &'static str {
        "VTG"
    }

    fn empty(&mut self) {
        *self = Self::default();
    }

    fn parse(&mut self, sentence: &Sentence) -> Result<(), Error> {
        checksum_gate(sentence, 9)?;

        self.track_degrees_true = sentence.double(1);
        self.track_degrees_magnetic = sentence.double(3);
        self.speed_knots = sentence.double(5);
        self.speed_kilometers_per_hour = sentence.double(7);

        Ok(())
    }

    fn write(&self, sentence: &mut Sentence) {
        self.write_header(sentence);
        sentence
            .append(self.track_degrees_true)
            .append("T")
            .append(self.track_degrees_magnetic)
            .append("M")
            .append(self.speed_knots)
            .append("N")
            .append(self.speed_kilometers_per_hour)
            .append("K");
        sentence.finish();
    }

    fn plain_english(&self) -> String {
        format!(
            "You are making good a true track of {:.1} degrees at {:.1} knots.",
            self.track_degrees_true, self.speed_knots
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let sentence = Sentence::from("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48\r\n");
        let mut vtg = VTG::default();

        assert!(vtg.parse(&sentence).is_ok());
        assert_eq!(vtg.track_degrees_true, 54.7);
        assert_eq!(vtg.track_degrees_magnetic, 34.4);
        assert_eq!(vtg.speed_knots, 5.5);
        assert_eq!(vtg.speed_kilometers_per_hour, 10.2);
    }

    #[test]
    fn test_write() {
        let vtg = VTG {
            track_degrees_true: 54.7,
            track_degrees_magnetic: 34.4,
            speed_knots: 5.5,
            speed_kilometers_per_hour: 10.2,
        };

        let mut sentence = Sentence::new();
        vtg.write(&mut sentence);

        assert_eq!(
            sentence.as_str(),
            "$GPVTG,54.700,T,34.400,M,5.500,N,10.200,K*78\r\n"
        );
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let sentence = Sentence::from("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*00\r\n");
        let mut vtg = VTG::default();

        assert!(matches!(
            vtg.parse(&sentence),
            Err(Error::ChecksumMismatch { .. })
        ));
        assert_eq!(vtg, VTG::default());
    }
}
