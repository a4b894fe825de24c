use crate::{
    Error,
    sentence::Sentence,
    sentences::{Response, checksum_gate},
    vocabulary::{LeftRight, Status},
};

/// XTE - Cross-Track Error, Measured
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_xte_cross_track_error_measured>
///
/// ```text
///         1 2 3   4 5
///         | | |   | |
///  $--XTE,A,A,x.x,a,N*hh<CR><LF>
/// ```
///
/// Field 1 flags a general warning, field 2 a Loran-C cycle lock
/// warning; both predate GPS but are still transmitted.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct XTE {
    pub is_data_valid: Status,
    pub is_cycle_lock_ok: Status,
    pub cross_track_error_nautical_miles: f64,
    pub direction_to_steer: LeftRight,
}

impl Response for XTE {
    fn mnemonic(&self) -> &'static str {
        "XTE"
    }

    fn empty(&mut self) {
        *self = Self::default();
    }

    fn parse(&mut self, sentence: &Sentence) -> Result<(), Error> {
        checksum_gate(sentence, 6)?;

        self.is_data_valid = sentence.status(1);
        self.is_cycle_lock_ok = sentence.status(2);
        self.cross_track_error_nautical_miles = sentence.double(3);
        self.direction_to_steer = sentence.left_right(4);

        Ok(())
    }

    fn write(&self, sentence: &mut Sentence) {
        self.write_header(sentence);
        sentence
            .append(self.is_data_valid)
            .append(self.is_cycle_lock_ok)
            .append(self.cross_track_error_nautical_miles)
            .append(self.direction_to_steer)
            .append("N");
        sentence.finish();
    }

    fn plain_english(&self) -> String {
        format!(
            "You are {:.2} nautical miles off track; steer {} to correct.",
            self.cross_track_error_nautical_miles,
            match self.direction_to_steer {
                LeftRight::Left => "left",
                LeftRight::Right => "right",
                LeftRight::Unknown => "in an unknown direction",
            }
        )
    }
}
