use crate::{
    Error,
    sentence::Sentence,
    sentences::{Response, Satellite, checksum_gate},
};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3  4  5  6   7
///         | | |  |  |  |   |
///  $--GSV,x,x,xx,xx,xx,xxx,xx,...*hh<CR><LF>
/// ```
///
/// Up to four PRN/elevation/azimuth/SNR groups per message; a
/// constellation snapshot spans `total_messages` consecutive sentences.
/// The sentence length varies with the group count, so the checksum
/// field is located from the separator count rather than a fixed index.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GSV {
    pub total_messages: i32,
    pub message_number: i32,
    pub satellites_in_view: i32,
    pub satellites: heapless::Vec<Satellite, 4>,
}

impl Response for GSV {
    fn mnemonic(&self) -> &'static str {
        "GSV"
    }

    fn empty(&mut self) {
        *self = Self::default();
    }

    fn parse(&mut self, sentence: &Sentence) -> Result<(), Error> {
        let number_of_fields = i32::from(sentence.number_of_fields());
        checksum_gate(sentence, number_of_fields + 1)?;

        self.total_messages = sentence.integer(1);
        self.message_number = sentence.integer(2);
        self.satellites_in_view = sentence.integer(3);

        self.satellites.clear();
        for group in 0..4 {
            let base = 4 + group * 4;
            // stay within the data fields: past them, field() would land
            // on the checksum token
            if base > number_of_fields {
                break;
            }
            let Some(prn) = sentence.optional_integer(base) else {
                break;
            };

            let satellite = Satellite {
                prn,
                elevation: sentence.optional_integer(base + 1),
                azimuth: sentence.optional_integer(base + 2),
                snr: sentence.optional_integer(base + 3),
            };
            self.satellites.push(satellite).ok();
        }

        Ok(())
    }

    fn write(&self, sentence: &mut Sentence) {
        self.write_header(sentence);
        sentence
            .append(self.total_messages)
            .append(self.message_number)
            .append(self.satellites_in_view);
        for satellite in &self.satellites {
            sentence
                .append(satellite.prn)
                .append(satellite.elevation)
                .append(satellite.azimuth)
                .append(satellite.snr);
        }
        sentence.finish();
    }

    fn plain_english(&self) -> String {
        format!(
            "{} satellites in view; message {} of {} carries {} of them.",
            self.satellites_in_view,
            self.message_number,
            self.total_messages,
            self.satellites.len()
        )
    }
}
