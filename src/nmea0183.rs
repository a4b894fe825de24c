//! # Facade
//!
//! [`Nmea0183`] owns one [`Sentence`] buffer and one long-lived instance
//! of every supported sentence type, and routes incoming lines to the
//! right decoder by their 3-letter mnemonic.

use crate::{
    Error,
    sentence::Sentence,
    sentences::{DBT, DPT, GGA, GLL, GSA, GSV, RMC, Response, VTG, XDR, XTE, ZDA},
    talker,
};

/// The decode entry point: feed a raw line with
/// [`set_sentence`](Self::set_sentence), decode it with
/// [`parse`](Self::parse), then read the typed fields from the matching
/// member (`gll`, `rmc`, …).
///
/// The decoder instances are created once and mutated in place on every
/// successful parse of their type, so two successive lines of the same
/// type share one instance; clone it to keep a snapshot. One facade
/// serves one line source; it holds no locks, so concurrent calls on a
/// shared instance are not supported, while separate instances are
/// fully independent.
///
/// ```
/// use nmea0183_codec::Nmea0183;
///
/// let mut nmea = Nmea0183::new();
/// nmea.set_sentence("$GPGLL,4916.45,N,12311.12,W,225444,A*31\r\n");
/// assert!(nmea.parse().is_ok());
/// assert_eq!(nmea.gll.position.latitude, 4916.45);
/// assert_eq!(nmea.last_sentence_id_parsed, "GLL");
/// ```
#[derive(Debug, Default)]
pub struct Nmea0183 {
    sentence: Sentence,

    pub dbt: DBT,
    pub dpt: DPT,
    pub gga: GGA,
    pub gll: GLL,
    pub gsa: GSA,
    pub gsv: GSV,
    pub rmc: RMC,
    pub vtg: VTG,
    pub xdr: XDR,
    pub xte: XTE,
    pub zda: ZDA,

    /// Filled when [`parse`](Self::parse) fails
    pub error_message: String,
    /// Mnemonic of the last sentence successfully parsed
    pub last_sentence_id_parsed: String,
    /// Mnemonic of the last sentence received, parsed or not
    pub last_sentence_id_received: String,
    /// Human-readable rendering of the last successful parse
    pub plain_text: String,

    pub talker_id: String,
    pub expanded_talker_id: String,
}

impl Nmea0183 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw line in the sentence buffer; nothing is parsed
    /// until [`parse`](Self::parse) is called.
    pub fn set_sentence(&mut self, source: &str) {
        self.sentence.set(source);
    }

    /// The current raw or assembled sentence text.
    pub fn get_sentence(&self) -> &str {
        self.sentence.as_str()
    }

    /// Decodes the stored line: extracts the mnemonic, routes to the
    /// matching decoder, and updates the bookkeeping fields.
    ///
    /// Each call is one complete, synchronous transaction; there is no
    /// partial or pending state to resume.
    pub fn parse(&mut self) -> Result<(), Error> {
        match self.dispatch() {
            Ok(()) => {
                self.error_message.clear();
                Ok(())
            }
            Err(error) => {
                self.error_message = error.to_string();
                Err(error)
            }
        }
    }

    fn dispatch(&mut self) -> Result<(), Error> {
        if !self.sentence.as_str().is_ascii() {
            return Err(Error::NonAscii);
        }

        let header = self.sentence.header();
        if header.len() < 3 {
            return Err(Error::MalformedHeader);
        }

        // The mnemonic is the trailing 3 characters of the header; what
        // precedes it (normally 2 characters) is the talker id.
        let (talker_id, mnemonic) = header.split_at(header.len() - 3);
        let talker_id = talker_id.to_owned();
        let mnemonic = mnemonic.to_owned();

        self.expanded_talker_id = talker::expand(&talker_id).unwrap_or_default().to_owned();
        self.talker_id = talker_id;
        self.last_sentence_id_received = mnemonic.clone();

        let sentence = std::mem::take(&mut self.sentence);
        let outcome = match self.response_mut(&mnemonic) {
            Some(response) => response
                .parse(&sentence)
                .map(|()| response.plain_english()),
            None => Err(Error::UnrecognizedSentence(mnemonic.clone())),
        };
        self.sentence = sentence;

        let plain_text = outcome?;
        self.plain_text = plain_text;
        self.last_sentence_id_parsed = mnemonic;

        Ok(())
    }

    /// The dispatch table: every known mnemonic maps to exactly one
    /// long-lived decoder instance. The key set is fixed at build time.
    fn response_mut(&mut self, mnemonic: &str) -> Option<&mut dyn Response> {
        Some(match mnemonic {
            "DBT" => &mut self.dbt,
            "DPT" => &mut self.dpt,
            "GGA" => &mut self.gga,
            "GLL" => &mut self.gll,
            "GSA" => &mut self.gsa,
            "GSV" => &mut self.gsv,
            "RMC" => &mut self.rmc,
            "VTG" => &mut self.vtg,
            "XDR" => &mut self.xdr,
            "XTE" => &mut self.xte,
            "ZDA" => &mut self.zda,
            _ => return None,
        })
    }
}
