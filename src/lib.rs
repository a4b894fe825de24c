//! # NMEA 0183 Codec
//!
//! This library decodes and encodes NMEA 0183 sentences, the ASCII
//! messages marine navigation devices exchange over a serial link:
//! `$HHHHH,D1,D2,...,Dn*CC\r\n`
//!
//! The pieces fit together like the devices do:
//! - [`Sentence`] owns one raw line and provides tokenized field access,
//!   checksum computation/verification, and the output builder.
//! - Each sentence type ([`sentences::GLL`], [`sentences::RMC`], …)
//!   implements [`Response`]: reset, parse, write, describe.
//! - [`Nmea0183`] owns the buffer and one instance of every type, and
//!   routes incoming lines by their 3-letter mnemonic.
//!
//! Decoding is total: malformed, truncated, or adversarial input
//! produces empty tokens, zeros, `Unknown` vocabulary variants, or an
//! error result, never a panic. Input arrives from unreliable hardware
//! links and must not destabilize the host.
//!
//! ## Decoding
//!
//! ```rust
//! use nmea0183_codec::{Nmea0183, Status};
//!
//! let mut nmea = Nmea0183::new();
//! nmea.set_sentence("$GPGLL,4916.45,N,12311.12,W,225444,A*31\r\n");
//!
//! match nmea.parse() {
//!     Ok(()) => {
//!         assert_eq!(nmea.gll.position.latitude, 4916.45);
//!         assert_eq!(nmea.gll.is_data_valid, Status::Valid);
//!     }
//!     Err(error) => println!("decode failed: {error}"),
//! }
//! ```
//!
//! ## Encoding
//!
//! ```rust
//! use nmea0183_codec::{Response, Sentence, sentences::DPT};
//!
//! let dpt = DPT {
//!     depth_meters: 2.4,
//!     offset_from_transducer_meters: 0.4,
//! };
//!
//! let mut sentence = Sentence::new();
//! dpt.write(&mut sentence);
//! assert_eq!(sentence.as_str(), "$SDDPT,2.400,0.400*55\r\n");
//! ```

pub mod error;
mod nmea0183;
pub mod position;
pub mod sentence;
pub mod sentences;
pub mod talker;
pub mod vocabulary;

pub use error::Error;
pub use nmea0183::Nmea0183;
pub use position::Position;
pub use sentence::{AppendField, ChecksumStatus, Sentence};
pub use sentences::Response;
pub use vocabulary::{
    CommunicationsMode, EastWest, LeftRight, NorthSouth, Reference, Status, TransducerType,
};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
