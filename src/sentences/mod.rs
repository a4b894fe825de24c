//! # Sentence Decoders/Encoders
//!
//! One module per supported sentence type. Every type implements
//! [`Response`], the shared decode/encode contract, and holds the most
//! recently decoded fields as plain typed attributes.

mod dbt;
mod dpt;
mod gga;
mod gll;
mod gsa;
mod gsv;
mod rmc;
mod vtg;
mod xdr;
mod xte;
mod zda;

pub use dbt::DBT;
pub use dpt::DPT;
pub use gga::GGA;
pub use gll::GLL;
pub use gsa::{FixMode, GSA, SelectionMode};
pub use gsv::GSV;
pub use rmc::RMC;
pub use vtg::VTG;
pub use xdr::{TransducerMeasurement, XDR};
pub use xte::XTE;
pub use zda::ZDA;

use crate::{
    Error,
    sentence::{ChecksumStatus, Sentence},
};

/// The capability set shared by every sentence type: reset, decode from
/// a [`Sentence`], encode into one, and describe the held fields.
///
/// Implementations are mutable flyweights: the facade keeps one instance
/// per type for its whole lifetime, and `parse` overwrites the fields in
/// place. Successive parses of the same type are therefore not isolated
/// from one another; callers that need a snapshot should clone the
/// instance after a successful parse.
///
/// All four operations are total. `parse` reports failure through its
/// `Result`; nothing here panics on truncated or adversarial input.
pub trait Response {
    /// The 3-letter sentence type this instance handles, e.g. `"GLL"`.
    fn mnemonic(&self) -> &'static str;

    /// The talker id written by [`write`](Self::write). Encoders emit a
    /// fixed conventional talker per device class.
    fn talker(&self) -> &'static str {
        "GP"
    }

    /// Resets every field to its unknown/zero default.
    fn empty(&mut self);

    /// Decodes the buffer into this instance's fields.
    ///
    /// The sentence's checksum field is validated first: a present-but-
    /// wrong checksum fails immediately and leaves all fields untouched.
    /// An absent checksum is legal and the decode proceeds.
    fn parse(&mut self, sentence: &Sentence) -> Result<(), Error>;

    /// Assembles a complete outgoing sentence from this instance's
    /// fields: header, each field in the type's fixed order, checksum
    /// trailer, CR LF. Any previous buffer content is discarded.
    fn write(&self, sentence: &mut Sentence);

    /// A human-readable rendering of the held fields. Never fails.
    fn plain_english(&self) -> String;

    /// Starts an outgoing sentence: `$` + talker + mnemonic.
    fn write_header(&self, sentence: &mut Sentence) {
        sentence.begin(self.talker(), self.mnemonic());
    }
}

/// The checksum gate every `parse` runs before touching any field.
pub(crate) fn checksum_gate(sentence: &Sentence, field_number: i32) -> Result<(), Error> {
    match sentence.checksum_status(field_number) {
        ChecksumStatus::Bad { expected, found } => {
            Err(Error::ChecksumMismatch { expected, found })
        }
        _ => Ok(()),
    }
}

/// One satellite group within a [`GSV`] sentence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Satellite {
    pub prn: i32,
    /// Elevation in degrees, 90 maximum
    pub elevation: Option<i32>,
    /// Azimuth in degrees true, 000 to 359
    pub azimuth: Option<i32>,
    /// Signal-to-noise ratio in dB, empty when not tracking
    pub snr: Option<i32>,
}
