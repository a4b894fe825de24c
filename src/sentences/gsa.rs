use crate::{
    Error,
    sentence::Sentence,
    sentences::{Response, checksum_gate},
    vocabulary::vocabulary,
};

vocabulary! {
    /// Satellite selection mode.
    pub enum SelectionMode {
        /// A - Automatic, allowed to switch 2D/3D
        "A" => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        "M" => Manual,
    }
}

vocabulary! {
    /// Fix dimensionality.
    pub enum FixMode {
        "1" => NoFix,
        "2" => Fix2D,
        "3" => Fix3D,
    }
}

/// GSA - GPS DOP and Active Satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         |  |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// Twelve PRN slots; empty slots are legal and skipped on decode.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GSA {
    pub selection_mode: SelectionMode,
    pub fix_mode: FixMode,
    pub satellite_prns: heapless::Vec<i32, 12>,
    pub position_dilution: f64,
    pub horizontal_dilution: f64,
    pub vertical_dilution: f64,
}

impl Response for GSA {
    fn mnemonic(&self) -> &'static str {
        "GSA"
    }

    fn empty(&mut self) {
        *self = Self::default();
    }

    fn parse(&mut self, sentence: &Sentence) -> Result<(), Error> {
        checksum_gate(sentence, 18)?;

        self.selection_mode = SelectionMode::from_token(sentence.field(1));
        self.fix_mode = FixMode::from_token(sentence.field(2));
        self.satellite_prns.clear();
        for field_number in 3..=14 {
            if let Some(prn) = sentence.optional_integer(field_number) {
                self.satellite_prns.push(prn).ok();
            }
        }
        self.position_dilution = sentence.double(15);
        self.horizontal_dilution = sentence.double(16);
        self.vertical_dilution = sentence.double(17);

        Ok(())
    }

    fn write(&self, sentence: &mut Sentence) {
        self.write_header(sentence);
        sentence.append(self.selection_mode).append(self.fix_mode);
        for slot in 0..12 {
            sentence.append(self.satellite_prns.get(slot).copied());
        }
        sentence
            .append(self.position_dilution)
            .append(self.horizontal_dilution)
            .append(self.vertical_dilution);
        sentence.finish();
    }

    fn plain_english(&self) -> String {
        format!(
            "{} satellites are in use ({}), dilution of precision {:.1}/{:.1}/{:.1}.",
            self.satellite_prns.len(),
            match self.fix_mode {
                FixMode::NoFix => "no fix",
                FixMode::Fix2D => "2D fix",
                FixMode::Fix3D => "3D fix",
                FixMode::Unknown => "fix mode unknown",
            },
            self.position_dilution,
            self.horizontal_dilution,
            self.vertical_dilution
        )
    }
}
