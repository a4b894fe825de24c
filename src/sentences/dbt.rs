use crate::{
    Error,
    sentence::Sentence,
    sentences::{Response, checksum_gate},
};

/// DBT - Depth Below Transducer
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dbt_depth_below_transducer>
///
/// ```text
///         1   2 3   4 5   6
///         |   | |   | |   |
///  $--DBT,x.x,f,x.x,M,x.x,F*hh<CR><LF>
/// ```
///
/// The same depth three times over, in feet, meters, and fathoms.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DBT {
    pub depth_feet: f64,
    pub depth_meters: f64,
    pub depth_fathoms: f64,
}

impl Response for DBT {
    fn mnemonic(&self) -> &'static str {
        "DBT"
    }

    fn talker(&self) -> &'static str {
        "SD"
    }

    fn empty(&mut self) {
        *self = Self::default();
    }

    fn parse(&mut self, sentence: &Sentence) -> Result<(), Error> {
        checksum_gate(sentence, 7)?;

        self.depth_feet = sentence.double(1);
        self.depth_meters = sentence.double(3);
        self.depth_fathoms = sentence.double(5);

        Ok(())
    }

    fn write(&self, sentence: &mut Sentence) {
        self.write_header(sentence);
        sentence
            .append(self.depth_feet)
            .append("f")
            .append(self.depth_meters)
            .append("M")
            .append(self.depth_fathoms)
            .append("F");
        sentence.finish();
    }

    fn plain_english(&self) -> String {
        format!(
            "The depth below the transducer is {:.1} feet ({:.1} meters, {:.1} fathoms).",
            self.depth_feet, self.depth_meters, self.depth_fathoms
        )
    }
}
