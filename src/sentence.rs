//! # Sentence Buffer
//!
//! [`Sentence`] owns one raw NMEA 0183 line and provides everything the
//! per-type decoders share: 1-based field tokenization, checksum
//! computation and verification, lenient typed field readers, and the
//! output builder used when assembling outgoing sentences.
//!
//! The buffer is a pure value: there is no parsed/unparsed state, and
//! every accessor is a stateless function of the current bytes. All
//! accessors are total: arbitrary, truncated, or non-ASCII input yields
//! an empty token, a zero, or an `Unknown` variant, never a panic.

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{is_not, take},
    character::complete::{self as character, char},
    combinator::map_res,
    error::{ErrorKind, make_error},
    number::complete::{self as number, hex_u32},
};
use time::{Date, Month, OffsetDateTime, Time};

use crate::vocabulary::{
    CommunicationsMode, EastWest, LeftRight, NorthSouth, Reference, Status, TransducerType,
};

/// Result of validating a sentence's checksum field.
///
/// Checksums are optional in NMEA 0183, so "no checksum" is a distinct
/// outcome from "checksum wrong".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumStatus {
    /// A checksum is present and matches the sentence content.
    Good,
    /// A checksum is present and does not match the sentence content.
    Bad {
        /// The checksum calculated from the sentence content
        expected: u8,
        /// The checksum found in the designated field
        found: u8,
    },
    /// The designated field is empty; the sentence carries no checksum.
    Unknown,
}

/// One raw NMEA 0183 line:
/// `('$'|'!') talker(2) mnemonic(3) (',' field)* ['*' hex(2)] CR LF`.
///
/// Field indices are 1-based; index 0 is undefined. Both `,` and `*`
/// count as field separators, so for a sentence with n data fields the
/// checksum (when present) is field n + 1.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the buffer with a raw line.
    pub fn set(&mut self, source: &str) {
        self.text.clear();
        self.text.push_str(source);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The current raw or assembled text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the 1-based field at `field_number`.
    ///
    /// Scans from after the leading `$`/`!`, counting `,` and `*` as
    /// separators, then collects characters up to the next separator,
    /// NUL, or end of buffer. Requesting field 0, a negative field, or a
    /// field past the end yields `""`. Trailing CR LF are part of the
    /// last token; `*` terminates one, so checksummed sentences are not
    /// affected.
    pub fn field(&self, field_number: i32) -> &str {
        if field_number <= 0 {
            return "";
        }

        let bytes = self.text.as_bytes();
        let mut index = 1; // skip the leading '$' or '!'
        let mut current_field_number = 0;

        while current_field_number < field_number && index < bytes.len() {
            if bytes[index] == b',' || bytes[index] == b'*' {
                current_field_number += 1;
            }
            index += 1;
        }

        if current_field_number != field_number {
            return "";
        }

        let start = index;
        while index < bytes.len() && !matches!(bytes[index], b',' | b'*' | 0x00) {
            index += 1;
        }

        // Non-ASCII bytes cannot split cleanly at arbitrary offsets;
        // treat such a token as absent rather than slicing mid-character.
        self.text.get(start..index).unwrap_or("")
    }

    /// Counts field separators before `*` or the end of the buffer.
    pub fn number_of_fields(&self) -> u16 {
        let bytes = self.text.as_bytes();
        let mut count: u16 = 0;

        for &byte in bytes.iter().skip(1) {
            match byte {
                b'*' => return count,
                b',' => count = count.saturating_add(1),
                _ => {}
            }
        }

        count
    }

    /// XOR of every byte strictly between the leading `$`/`!` and the
    /// first of `*`, CR, or LF, processed left to right.
    pub fn compute_checksum(&self) -> u8 {
        self.text
            .as_bytes()
            .iter()
            .skip(1)
            .take_while(|&&byte| byte != b'*' && byte != b'\r' && byte != b'\n')
            .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
    }

    /// Validates the checksum carried in `field_number` against
    /// [`compute_checksum`](Self::compute_checksum).
    ///
    /// An empty field means the sentence carries no checksum, which is
    /// legal: the result is [`ChecksumStatus::Unknown`], not a failure.
    pub fn checksum_status(&self, field_number: i32) -> ChecksumStatus {
        let field = self.field(field_number);

        if field.is_empty() {
            return ChecksumStatus::Unknown;
        }

        let parsed: IResult<&str, u32> = hex_u32(field);
        let found = parsed.map(|(_, value)| value as u8).unwrap_or(0);
        let expected = self.compute_checksum();

        if expected == found {
            ChecksumStatus::Good
        } else {
            ChecksumStatus::Bad { expected, found }
        }
    }

    /// Reads a field as a double, `atof`-style: the longest numeric
    /// prefix is taken, and a missing or malformed field yields `0.0`.
    pub fn double(&self, field_number: i32) -> f64 {
        let parsed: IResult<&str, f64> = number::double(self.field(field_number));
        parsed.map(|(_, value)| value).unwrap_or(0.0)
    }

    /// Reads a field as an integer, `atoi`-style: a missing or malformed
    /// field yields `0`.
    pub fn integer(&self, field_number: i32) -> i32 {
        let parsed: IResult<&str, i32> = character::i32(self.field(field_number));
        parsed.map(|(_, value)| value).unwrap_or(0)
    }

    /// Like [`integer`](Self::integer), but an empty field is [`None`]
    /// rather than `0`, for layouts where absence is meaningful.
    ///
    /// A last field holding only the line terminator counts as empty.
    pub fn optional_integer(&self, field_number: i32) -> Option<i32> {
        let field = self.field(field_number).trim_end_matches(['\r', '\n']);
        if field.is_empty() {
            None
        } else {
            let parsed: IResult<&str, i32> = character::i32(field);
            Some(parsed.map(|(_, value)| value).unwrap_or(0))
        }
    }

    /// Reads the protocol boolean: `A` valid, `V` invalid, else unknown.
    pub fn status(&self, field_number: i32) -> Status {
        Status::from_token(self.field(field_number))
    }

    pub fn north_south(&self, field_number: i32) -> NorthSouth {
        NorthSouth::from_token(self.field(field_number))
    }

    pub fn east_west(&self, field_number: i32) -> EastWest {
        EastWest::from_token(self.field(field_number))
    }

    pub fn left_right(&self, field_number: i32) -> LeftRight {
        LeftRight::from_token(self.field(field_number))
    }

    pub fn reference(&self, field_number: i32) -> Reference {
        Reference::from_token(self.field(field_number))
    }

    pub fn transducer_type(&self, field_number: i32) -> TransducerType {
        TransducerType::from_token(self.field(field_number))
    }

    pub fn communications_mode(&self, field_number: i32) -> CommunicationsMode {
        CommunicationsMode::from_token(self.field(field_number))
    }

    /// Reads a `HHMMSS[.sss]` field as a timestamp anchored to the
    /// current calendar date in UTC.
    ///
    /// Only the first six characters are significant; fractional seconds
    /// are ignored. A field shorter than six characters, or one whose
    /// components are out of range, yields the current time unmodified.
    /// The anchoring means a time-of-day received just before midnight
    /// can be attributed to the wrong date; callers needing exact dates
    /// should use sentences that carry one (RMC, ZDA).
    pub fn time(&self, field_number: i32) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();

        match hour_minute_second(self.field(field_number)) {
            Ok((_, time)) => now.replace_time(time),
            Err(_) => now,
        }
    }

    /// Reads a `DDMMYY` field as a calendar date.
    ///
    /// Two-digit years 83–99 are taken as 19xx, all others as 20xx.
    pub fn date(&self, field_number: i32) -> Option<Date> {
        let (_, (day, month, year)) = (two_digits, two_digits, two_digits)
            .parse(self.field(field_number))
            .ok()?;

        let month = Month::try_from(month).ok()?;
        let year = if (83..=99).contains(&year) {
            1900 + i32::from(year)
        } else {
            2000 + i32::from(year)
        };

        Date::from_calendar_date(year, month, day).ok()
    }

    /// The header token between the leading `$`/`!` and the first `,`
    /// or `*`, e.g. `"GPGLL"`. Empty if the buffer has no such shape.
    pub fn header(&self) -> &str {
        fn address(i: &str) -> IResult<&str, &str> {
            let (i, _) = alt((char('$'), char('!'))).parse(i)?;
            is_not(",*\r\n").parse(i)
        }

        address(self.text.as_str())
            .map(|(_, header)| header)
            .unwrap_or("")
    }

    /// Resets the buffer to the start of an outgoing sentence:
    /// `$` + talker id + mnemonic, with no trailing separator.
    pub fn begin(&mut self, talker_id: &str, mnemonic: &str) {
        self.text.clear();
        self.text.push('$');
        self.text.push_str(talker_id);
        self.text.push_str(mnemonic);
    }

    /// Appends `,` and the value's canonical wire token.
    ///
    /// Absent values (`None`, a vocabulary `Unknown`) append nothing
    /// after the separator, producing a legal empty field.
    pub fn append(&mut self, value: impl AppendField) -> &mut Self {
        value.append_to(self);
        self
    }

    /// Computes the checksum over the buffer built so far and appends
    /// `*`, two uppercase hex digits, and CR LF.
    ///
    /// Call exactly once, after the last field: a second call appends a
    /// second trailer.
    pub fn finish(&mut self) {
        let checksum = self.compute_checksum();
        let trailer = format!("*{checksum:02X}\r\n");
        self.text.push_str(&trailer);
    }

    pub(crate) fn push_separator(&mut self) {
        self.text.push(',');
    }

    pub(crate) fn push_str(&mut self, token: &str) {
        self.text.push_str(token);
    }
}

impl From<&str> for Sentence {
    fn from(source: &str) -> Self {
        Sentence {
            text: source.to_owned(),
        }
    }
}

fn two_digits(i: &str) -> IResult<&str, u8> {
    map_res(take(2u8), str::parse).parse(i)
}

fn hour_minute_second(i: &str) -> IResult<&str, Time> {
    let (i, (hour, minute, second)) = (two_digits, two_digits, two_digits).parse(i)?;

    match Time::from_hms(hour, minute, second) {
        Ok(time) => Ok((i, time)),
        Err(_) => Err(nom::Err::Error(make_error(i, ErrorKind::Verify))),
    }
}

/// Conversion to the wire token appended by [`Sentence::append`].
///
/// Implemented for the numeric primitives, strings, timestamps, the
/// vocabulary enums, [`Position`](crate::Position), and `Option<T>` of
/// any of these.
pub trait AppendField {
    /// Writes `,` followed by this value's canonical wire token.
    fn append_to(self, sentence: &mut Sentence);
}

impl AppendField for f64 {
    fn append_to(self, sentence: &mut Sentence) {
        sentence.push_separator();
        let formatted = format!("{self:.3}");
        sentence.push_str(&formatted);
    }
}

impl AppendField for i32 {
    fn append_to(self, sentence: &mut Sentence) {
        sentence.push_separator();
        let formatted = format!("{self}");
        sentence.push_str(&formatted);
    }
}

impl AppendField for &str {
    fn append_to(self, sentence: &mut Sentence) {
        sentence.push_separator();
        sentence.push_str(self);
    }
}

impl AppendField for OffsetDateTime {
    fn append_to(self, sentence: &mut Sentence) {
        sentence.push_separator();
        let formatted = format!("{:02}{:02}{:02}", self.hour(), self.minute(), self.second());
        sentence.push_str(&formatted);
    }
}

impl<T: AppendField> AppendField for Option<T> {
    fn append_to(self, sentence: &mut Sentence) {
        match self {
            Some(value) => value.append_to(sentence),
            None => sentence.push_separator(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLL: &str = "$GPGLL,4916.45,N,12311.12,W,225444,A*31\r\n";

    #[test]
    fn test_field_extraction() {
        let sentence = Sentence::from(GLL);

        assert_eq!(sentence.field(1), "4916.45");
        assert_eq!(sentence.field(2), "N");
        assert_eq!(sentence.field(3), "12311.12");
        assert_eq!(sentence.field(4), "W");
        assert_eq!(sentence.field(5), "225444");
        assert_eq!(sentence.field(6), "A");
        // '*' is the 7th separator; CR LF belong to the token after it
        assert_eq!(sentence.field(7), "31\r\n");
    }

    #[test]
    fn test_field_out_of_range_is_empty() {
        let sentence = Sentence::from(GLL);

        assert_eq!(sentence.field(0), "");
        assert_eq!(sentence.field(-1), "");
        assert_eq!(sentence.field(-500), "");
        assert_eq!(sentence.field(8), "");
        assert_eq!(sentence.field(i32::MAX), "");
    }

    #[test]
    fn test_field_adjacent_commas_are_empty_tokens() {
        let sentence = Sentence::from("$GPXXX,,b,,d");

        assert_eq!(sentence.field(1), "");
        assert_eq!(sentence.field(2), "b");
        assert_eq!(sentence.field(3), "");
        assert_eq!(sentence.field(4), "d");
    }

    #[test]
    fn test_field_stops_at_nul() {
        let sentence = Sentence::from("$GPXXX,ab\0cd,e");

        assert_eq!(sentence.field(1), "ab");
        assert_eq!(sentence.field(2), "e");
    }

    #[test]
    fn test_number_of_fields() {
        assert_eq!(Sentence::from(GLL).number_of_fields(), 6);
        assert_eq!(Sentence::from("$GPGLL,a,b").number_of_fields(), 2);
        assert_eq!(Sentence::from("$GPGLL").number_of_fields(), 0);
        assert_eq!(Sentence::from("").number_of_fields(), 0);
        assert_eq!(Sentence::from("$GPXXX,a,b,c\r\n").number_of_fields(), 3);
    }

    #[test]
    fn test_compute_checksum() {
        assert_eq!(Sentence::from(GLL).compute_checksum(), 0x31);
        // the checksum range ends before CR/LF even when no '*' is present
        assert_eq!(
            Sentence::from("$GPGLL,4916.45,N,12311.12,W,225444,A\r\n").compute_checksum(),
            0x31
        );
        assert_eq!(Sentence::from("").compute_checksum(), 0);
        assert_eq!(Sentence::from("$").compute_checksum(), 0);
    }

    #[test]
    fn test_checksum_status() {
        let sentence = Sentence::from(GLL);
        assert_eq!(sentence.checksum_status(7), ChecksumStatus::Good);

        let sentence = Sentence::from("$GPGLL,4916.45,N,12311.12,W,225444,A*00\r\n");
        assert_eq!(
            sentence.checksum_status(7),
            ChecksumStatus::Bad {
                expected: 0x31,
                found: 0x00
            }
        );

        // no checksum at all: the designated field is empty
        let sentence = Sentence::from("$GPGLL,4916.45,N,12311.12,W,225444,A\r\n");
        assert_eq!(sentence.checksum_status(7), ChecksumStatus::Unknown);
    }

    #[test]
    fn test_checksum_rejects_every_single_byte_alteration() {
        let end = GLL.find('*').unwrap();

        for index in 1..end {
            let mut altered = GLL.as_bytes().to_vec();
            altered[index] ^= 0x01;
            let altered = String::from_utf8(altered).unwrap();

            let sentence = Sentence::from(altered.as_str());
            assert_ne!(
                sentence.compute_checksum(),
                0x31,
                "alteration at byte {index} went undetected: {altered:?}"
            );
        }
    }

    #[test]
    fn test_lenient_numeric_readers() {
        let sentence = Sentence::from("$GPXXX,4916.45,-12.5,225444,junk,12.9,08,");

        assert_eq!(sentence.double(1), 4916.45);
        assert_eq!(sentence.double(2), -12.5);
        assert_eq!(sentence.integer(3), 225444);
        assert_eq!(sentence.double(4), 0.0);
        assert_eq!(sentence.integer(4), 0);
        assert_eq!(sentence.integer(5), 12);
        assert_eq!(sentence.integer(6), 8);
        assert_eq!(sentence.double(7), 0.0);
        assert_eq!(sentence.integer(99), 0);

        assert_eq!(sentence.optional_integer(6), Some(8));
        assert_eq!(sentence.optional_integer(7), None);
        assert_eq!(sentence.optional_integer(99), None);

        // a trailing field holding only CR LF counts as absent
        let sentence = Sentence::from("$GPXXX,1,\r\n");
        assert_eq!(sentence.optional_integer(1), Some(1));
        assert_eq!(sentence.optional_integer(2), None);
    }

    #[test]
    fn test_vocabulary_readers() {
        let sentence = Sentence::from(GLL);

        assert_eq!(sentence.status(6), Status::Valid);
        assert_eq!(sentence.north_south(2), NorthSouth::North);
        assert_eq!(sentence.east_west(4), EastWest::West);
        assert_eq!(sentence.status(1), Status::Unknown);
        assert_eq!(sentence.left_right(2), LeftRight::Unknown);
        assert_eq!(sentence.reference(4), Reference::WaterReferenced);
        assert_eq!(sentence.transducer_type(2), TransducerType::Force);
        assert_eq!(sentence.communications_mode(6), CommunicationsMode::Unknown);
    }

    #[test]
    fn test_time_parses_hhmmss() {
        let sentence = Sentence::from(GLL);
        let time = sentence.time(5);

        assert_eq!(time.hour(), 22);
        assert_eq!(time.minute(), 54);
        assert_eq!(time.second(), 44);
        assert_eq!(time.date(), OffsetDateTime::now_utc().date());
    }

    #[test]
    fn test_time_ignores_fractional_seconds() {
        let sentence = Sentence::from("$GPXXX,225444.35");
        let time = sentence.time(1);

        assert_eq!((time.hour(), time.minute(), time.second()), (22, 54, 44));
    }

    #[test]
    fn test_time_short_or_bad_field_yields_current_time() {
        for raw in ["$GPXXX,2254", "$GPXXX,", "$GPXXX,995959", "$GPXXX,ab12cd"] {
            let sentence = Sentence::from(raw);
            let fallback = sentence.time(1);
            let now = OffsetDateTime::now_utc();

            let drift = (now - fallback).whole_seconds().abs();
            assert!(drift < 5, "fallback drifted {drift}s for {raw:?}");
        }
    }

    #[test]
    fn test_date_parses_ddmmyy() {
        let sentence = Sentence::from("$GPXXX,191194,050607,999999,19119");

        let date = sentence.date(1).unwrap();
        assert_eq!((date.day(), date.month() as u8, date.year()), (19, 11, 1994));

        let date = sentence.date(2).unwrap();
        assert_eq!((date.day(), date.month() as u8, date.year()), (5, 6, 2007));

        assert_eq!(sentence.date(3), None);
        assert_eq!(sentence.date(4), None);
    }

    #[test]
    fn test_header() {
        assert_eq!(Sentence::from(GLL).header(), "GPGLL");
        assert_eq!(Sentence::from("!AIVDM,1,1").header(), "AIVDM");
        assert_eq!(Sentence::from("GPGLL,no,dollar").header(), "");
        assert_eq!(Sentence::from("$").header(), "");
        assert_eq!(Sentence::from("$,fields").header(), "");
        assert_eq!(Sentence::from("").header(), "");
    }

    #[test]
    fn test_builder_assembles_a_checksummed_sentence() {
        let mut sentence = Sentence::new();

        sentence.begin("GP", "GLL");
        sentence
            .append(4916.45)
            .append(NorthSouth::North)
            .append(12311.12)
            .append(EastWest::West)
            .append("225444")
            .append(Status::Valid);
        sentence.finish();

        assert_eq!(
            sentence.as_str(),
            "$GPGLL,4916.450,N,12311.120,W,225444,A*31\r\n"
        );
    }

    #[test]
    fn test_builder_absent_values_leave_empty_fields() {
        let mut sentence = Sentence::new();

        sentence.begin("GP", "XXX");
        sentence
            .append(Status::Unknown)
            .append(Option::<i32>::None)
            .append(7)
            .append(Option::<f64>::Some(1.25));
        sentence.finish();

        assert!(sentence.as_str().starts_with("$GPXXX,,,7,1.250*"));
        assert!(sentence.as_str().ends_with("\r\n"));
    }

    #[test]
    fn test_builder_appends_zero_padded_time() {
        let time = Time::from_hms(1, 2, 3).unwrap();
        let timestamp = OffsetDateTime::UNIX_EPOCH.replace_time(time);

        let mut sentence = Sentence::new();
        sentence.begin("GP", "XXX");
        sentence.append(timestamp);

        assert_eq!(sentence.as_str(), "$GPXXX,010203");
    }

    #[test]
    fn test_accessors_are_total_on_garbage() {
        let garbage = [
            "",
            "$",
            "*",
            "$*",
            "no leading dollar",
            "$GP\u{20AC}LL,\u{e9},2*zz",
            "$,,,,*",
            "$GPGLL,4916.45\u{0}N",
            "\r\n",
            "$GPGLL,",
        ];

        for raw in garbage {
            let sentence = Sentence::from(raw);
            for n in -2..12 {
                let _ = sentence.field(n);
                let _ = sentence.double(n);
                let _ = sentence.integer(n);
                let _ = sentence.status(n);
                let _ = sentence.checksum_status(n);
                let _ = sentence.time(n);
                let _ = sentence.date(n);
            }
            let _ = sentence.number_of_fields();
            let _ = sentence.compute_checksum();
            let _ = sentence.header();
        }
    }
}
