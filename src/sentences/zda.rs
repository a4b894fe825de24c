use time::OffsetDateTime;

use crate::{
    Error,
    sentence::Sentence,
    sentences::{Response, checksum_gate},
};

/// ZDA - Time & Date
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,zz,zz*hh<CR><LF>
/// ```
///
/// Fields 5 and 6 are the local zone offset from UTC, hours and minutes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ZDA {
    /// Time token as transmitted, `hhmmss[.ss]`
    pub utc_time: String,
    /// Time of day anchored to the current UTC date
    pub time: Option<OffsetDateTime>,
    pub day: i32,
    pub month: i32,
    pub year: i32,
    pub local_hour_offset: i32,
    pub local_minute_offset: i32,
}

impl Response for ZDA {
    fn mnemonic(&self) -> &'static str {
        "ZDA"
    }

    fn empty(&mut self) {
        *self = Self::default();
    }

    fn parse(&mut self, sentence: &Sentence) -> Result<(), Error> {
        checksum_gate(sentence, 7)?;

        self.utc_time = sentence.field(1).to_owned();
        self.time = Some(sentence.time(1));
        self.day = sentence.integer(2);
        self.month = sentence.integer(3);
        self.year = sentence.integer(4);
        self.local_hour_offset = sentence.integer(5);
        self.local_minute_offset = sentence.integer(6);

        Ok(())
    }

    fn write(&self, sentence: &mut Sentence) {
        self.write_header(sentence);
        sentence
            .append(self.utc_time.as_str())
            .append(self.day)
            .append(self.month)
            .append(self.year)
            .append(self.local_hour_offset)
            .append(self.local_minute_offset);
        sentence.finish();
    }

    fn plain_english(&self) -> String {
        format!(
            "The date is {:04}-{:02}-{:02} and the time is {} UTC \
             (local zone {:+03}:{:02}).",
            self.year,
            self.month,
            self.day,
            self.utc_time,
            self.local_hour_offset,
            self.local_minute_offset.abs()
        )
    }
}
