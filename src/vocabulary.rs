//! # Field Vocabulary
//!
//! Closed token↔variant tables shared by the sentence decoders. Every
//! table carries an `Unknown` sentinel: decoding an unrecognized token
//! yields `Unknown`, and encoding `Unknown` emits an empty field. The
//! token→variant mapping is the exact inverse of variant→token.

/// Generates a field-vocabulary enum: a closed set of wire tokens plus an
/// `Unknown` default, with the bidirectional mapping and the
/// output-builder append behavior.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $token:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// Token was absent or not part of the table.
            #[default]
            Unknown,
        }

        impl $name {
            /// Looks up the variant for a wire token.
            pub fn from_token(token: &str) -> Self {
                match token {
                    $( $token => Self::$variant, )*
                    _ => Self::Unknown,
                }
            }

            /// The canonical wire token, or [`None`] for `Unknown`.
            pub fn token(self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => Some($token), )*
                    Self::Unknown => None,
                }
            }
        }

        impl crate::sentence::AppendField for $name {
            fn append_to(self, sentence: &mut crate::sentence::Sentence) {
                sentence.push_separator();
                if let Some(token) = self.token() {
                    sentence.push_str(token);
                }
            }
        }
    };
}

pub(crate) use vocabulary;

vocabulary! {
    /// Data status flag, the protocol's boolean.
    pub enum Status {
        /// A - Data valid
        "A" => Valid,
        /// V - Data invalid
        "V" => Invalid,
    }
}

vocabulary! {
    /// Latitude hemisphere.
    pub enum NorthSouth {
        "N" => North,
        "S" => South,
    }
}

vocabulary! {
    /// Longitude hemisphere, also used for magnetic variation.
    pub enum EastWest {
        "E" => East,
        "W" => West,
    }
}

vocabulary! {
    /// Direction to steer.
    pub enum LeftRight {
        "L" => Left,
        "R" => Right,
    }
}

vocabulary! {
    /// Speed/course reference.
    pub enum Reference {
        /// B - Bottom tracking log
        "B" => BottomTrackingLog,
        /// M - Manually entered
        "M" => ManuallyEntered,
        /// W - Water referenced
        "W" => WaterReferenced,
        /// R - Radar tracking of fixed target
        "R" => RadarTrackingOfFixedTarget,
        /// P - Positioning system ground reference
        "P" => PositioningSystemGroundReference,
    }
}

vocabulary! {
    /// Transducer category used by XDR measurement groups.
    pub enum TransducerType {
        /// A - Angular displacement
        "A" => AngularDisplacement,
        /// D - Linear displacement
        "D" => LinearDisplacement,
        /// C - Temperature
        "C" => Temperature,
        /// F - Frequency
        "F" => Frequency,
        /// N - Force
        "N" => Force,
        /// P - Pressure
        "P" => Pressure,
        /// R - Flow rate
        "R" => FlowRate,
        /// T - Tachometer
        "T" => Tachometer,
        /// H - Humidity
        "H" => Humidity,
        /// V - Volume
        "V" => Volume,
    }
}

vocabulary! {
    /// Radiotelephone operating mode, ITU emission designators.
    pub enum CommunicationsMode {
        /// d - F3E/G3E simplex telephone
        "d" => F3eG3eSimplexTelephone,
        /// e - F3E/G3E duplex telephone
        "e" => F3eG3eDuplexTelephone,
        /// m - J3E telephone
        "m" => J3eTelephone,
        /// o - H3E telephone
        "o" => H3eTelephone,
        /// q - F1B/J2B FEC NBDP telex/teleprinter
        "q" => F1bJ2bFecNbdpTelexTeleprinter,
        /// s - F1B/J2B ARQ NBDP telex/teleprinter
        "s" => F1bJ2bArqNbdpTelexTeleprinter,
        /// w - F1B/J2B receive-only teleprinter/DSC
        "w" => F1bJ2bReceiveOnlyTeleprinterDsc,
        /// x - A1A Morse tape recorder
        "x" => A1aMorseTapeRecorder,
        /// { - A1A Morse key/headset
        "{" => A1aMorseKeyHeadset,
        /// | - F1C/F2C/F3C fax machine
        "|" => F1cF2cF3cFaxMachine,
    }
}
