//! # Talker Identifiers
//!
//! Expansion of the 2-letter talker id at the front of a sentence header
//! into a device-class name. Used for descriptive output only; the codec
//! never branches on the talker.

const TALKERS: &[(&str, &str)] = &[
    ("AG", "Autopilot - General"),
    ("AI", "Automatic Identification System"),
    ("AP", "Autopilot - Magnetic"),
    ("CD", "Communications - Digital Selective Calling"),
    ("CS", "Communications - Satellite"),
    ("CT", "Communications - Radio-Telephone (MF/HF)"),
    ("CV", "Communications - Radio-Telephone (VHF)"),
    ("CX", "Communications - Scanning Receiver"),
    ("DE", "DECCA Navigation"),
    ("DF", "Direction Finder"),
    ("EC", "Electronic Chart Display and Information System"),
    ("EP", "Emergency Position Indicating Beacon"),
    ("ER", "Engine Room Monitoring Systems"),
    ("GA", "Galileo Positioning System"),
    ("GB", "BeiDou Positioning System"),
    ("GL", "GLONASS Positioning System"),
    ("GN", "Global Navigation Satellite System"),
    ("GP", "Global Positioning System"),
    ("HC", "Heading - Magnetic Compass"),
    ("HE", "Heading - North Seeking Gyro"),
    ("HN", "Heading - Non North Seeking Gyro"),
    ("II", "Integrated Instrumentation"),
    ("IN", "Integrated Navigation"),
    ("LC", "Loran-C"),
    ("OM", "OMEGA Navigation System"),
    ("RA", "RADAR and/or ARPA"),
    ("SD", "Depth Sounder"),
    ("SN", "Electronic Positioning System"),
    ("SS", "Scanning Sounder"),
    ("TI", "Turn Rate Indicator"),
    ("VD", "Velocity Sensor - Doppler"),
    ("VM", "Velocity Sensor - Speed Log, Water, Magnetic"),
    ("VW", "Velocity Sensor - Speed Log, Water, Mechanical"),
    ("WI", "Weather Instruments"),
    ("YX", "Transducer"),
    ("ZA", "Timekeeper - Atomic Clock"),
    ("ZC", "Timekeeper - Chronometer"),
    ("ZQ", "Timekeeper - Quartz"),
    ("ZV", "Timekeeper - Radio Update"),
];

/// Looks up the device-class name for a talker id, e.g.
/// `"GP"` → `"Global Positioning System"`.
pub fn expand(talker_id: &str) -> Option<&'static str> {
    TALKERS
        .iter()
        .find(|(id, _)| *id == talker_id)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_known_talkers() {
        assert_eq!(expand("GP"), Some("Global Positioning System"));
        assert_eq!(expand("SD"), Some("Depth Sounder"));
        assert_eq!(expand("II"), Some("Integrated Instrumentation"));
    }

    #[test]
    fn test_expand_unknown_talker() {
        assert_eq!(expand("XX"), None);
        assert_eq!(expand(""), None);
        assert_eq!(expand("gp"), None);
    }
}
