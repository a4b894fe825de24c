use time::OffsetDateTime;

use crate::{
    Error,
    position::Position,
    sentence::Sentence,
    sentences::{Response, checksum_gate},
    vocabulary::Status,
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,llll.ll,a,yyyyy.yy,a,hhmmss.ss,A*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GLL {
    pub position: Position,
    /// Fix time token as transmitted, `hhmmss[.ss]`
    pub utc_time: String,
    /// Fix time anchored to the current UTC date
    pub time: Option<OffsetDateTime>,
    pub is_data_valid: Status,
}

impl Response for GLL {
    fn mnemonic(&self) -> &'static str {
        "GLL"
    }

    fn empty(&mut self) {
        *self = Self::default();
    }

    fn parse(&mut self, sentence: &Sentence) -> Result<(), Error> {
        checksum_gate(sentence, 7)?;

        self.position.parse(1, 2, 3, 4, sentence);
        self.utc_time = sentence.field(5).to_owned();
        self.time = Some(sentence.time(5));
        self.is_data_valid = sentence.status(6);

        Ok(())
    }

    fn write(&self, sentence: &mut Sentence) {
        self.write_header(sentence);
        sentence
            .append(self.position)
            .append(self.utc_time.as_str())
            .append(self.is_data_valid);
        sentence.finish();
    }

    fn plain_english(&self) -> String {
        format!(
            "At {} UTC you were at {}.",
            self.utc_time,
            self.position.plain_english()
        )
    }
}
