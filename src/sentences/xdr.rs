use crate::{
    Error,
    sentence::Sentence,
    sentences::{Response, checksum_gate},
    vocabulary::TransducerType,
};

/// One type/value/units/name group within an [`XDR`] sentence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransducerMeasurement {
    pub transducer_type: TransducerType,
    pub measurement: f64,
    /// Units-of-measure token, e.g. `C` Celsius, `B` bars
    pub units: String,
    /// Transducer identifier
    pub name: String,
}

/// XDR - Transducer Measurement
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_xdr_transducer_measurement>
///
/// ```text
///         1 2   3 4
///         | |   | |
///  $--XDR,a,x.x,a,c--c,...*hh<CR><LF>
/// ```
///
/// Carries up to four measurement groups; the sentence length varies
/// with the group count, so the checksum field is located from the
/// separator count rather than a fixed index.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct XDR {
    pub measurements: heapless::Vec<TransducerMeasurement, 4>,
}

impl Response for XDR {
    fn mnemonic(&self) -> &'static str {
        "XDR"
    }

    fn talker(&self) -> &'static str {
        "SD"
    }

    fn empty(&mut self) {
        *self = Self::default();
    }

    fn parse(&mut self, sentence: &Sentence) -> Result<(), Error> {
        let number_of_fields = i32::from(sentence.number_of_fields());
        checksum_gate(sentence, number_of_fields + 1)?;

        self.measurements.clear();
        for group in 0..4 {
            let base = 1 + group * 4;
            if base > number_of_fields || sentence.field(base).is_empty() {
                break;
            }

            let measurement = TransducerMeasurement {
                transducer_type: sentence.transducer_type(base),
                measurement: sentence.double(base + 1),
                units: sentence.field(base + 2).to_owned(),
                name: sentence.field(base + 3).to_owned(),
            };
            self.measurements.push(measurement).ok();
        }

        Ok(())
    }

    fn write(&self, sentence: &mut Sentence) {
        self.write_header(sentence);
        for measurement in &self.measurements {
            sentence
                .append(measurement.transducer_type)
                .append(measurement.measurement)
                .append(measurement.units.as_str())
                .append(measurement.name.as_str());
        }
        sentence.finish();
    }

    fn plain_english(&self) -> String {
        if self.measurements.is_empty() {
            return "No transducer measurements.".to_owned();
        }

        let mut text = String::from("Transducer measurements:");
        for measurement in &self.measurements {
            text.push_str(&format!(
                " {} reads {:.2} {};",
                if measurement.name.is_empty() {
                    "unnamed"
                } else {
                    measurement.name.as_str()
                },
                measurement.measurement,
                measurement.units
            ));
        }
        text
    }
}
