use crate::{
    Error,
    sentence::Sentence,
    sentences::{Response, checksum_gate},
};

/// DPT - Depth of Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dpt_depth_of_water>
///
/// ```text
///         1   2
///         |   |
///  $--DPT,x.x,x.x*hh<CR><LF>
/// ```
///
/// Depth in meters at the transducer, plus the transducer's offset from
/// the waterline (positive) or the keel (negative).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DPT {
    pub depth_meters: f64,
    pub offset_from_transducer_meters: f64,
}

impl Response for DPT {
    fn mnemonic(&self) -> &'static str {
        "DPT"
    }

    fn talker(&self) -> &'static str {
        "SD"
    }

    fn empty(&mut self) {
        *self = Self::default();
    }

    fn parse(&mut self, sentence: &Sentence) -> Result<(), Error> {
        checksum_gate(sentence, 3)?;

        self.depth_meters = sentence.double(1);
        self.offset_from_transducer_meters = sentence.double(2);

        Ok(())
    }

    fn write(&self, sentence: &mut Sentence) {
        self.write_header(sentence);
        sentence
            .append(self.depth_meters)
            .append(self.offset_from_transducer_meters);
        sentence.finish();
    }

    fn plain_english(&self) -> String {
        format!(
            "The water is {:.1} meters deep at the transducer, offset {:.1} meters.",
            self.depth_meters, self.offset_from_transducer_meters
        )
    }
}
