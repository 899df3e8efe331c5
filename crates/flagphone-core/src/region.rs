// crates/flagphone-core/src/region.rs

//! ISO 3166-1 alpha-2 region identifiers.
//!
//! [`RegionCode`] has one variant per country the bundled dataset supports.
//! Variants serialize as their two-letter code, so `"FR"` in a dataset file
//! deserializes to [`RegionCode::FR`].

use crate::error::PickerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! region_codes {
    ($($code:ident,)+) => {
        /// Enumerated ISO region identifier of a country.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum RegionCode {
            $($code,)+
        }

        impl RegionCode {
            /// Every supported code, in alphabetical order.
            pub const ALL: &'static [RegionCode] = &[$(RegionCode::$code,)+];

            /// The upper-case two-letter code (e.g. `"FR"`).
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(RegionCode::$code => stringify!($code),)+
                }
            }
        }

        impl FromStr for RegionCode {
            type Err = PickerError;

            /// Parses a two-letter code, case-insensitive and ignoring
            /// surrounding whitespace.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let code = s.trim().to_ascii_uppercase();
                match code.as_str() {
                    $(stringify!($code) => Ok(RegionCode::$code),)+
                    _ => Err(PickerError::UnknownRegionCode(s.to_string())),
                }
            }
        }
    };
}

region_codes! {
    AD, AE, AF, AG, AI, AL, AM, AO, AQ, AR,
    AS, AT, AU, AW, AX, AZ, BA, BB, BD, BE,
    BF, BG, BH, BI, BJ, BL, BM, BN, BO, BQ,
    BR, BS, BT, BV, BW, BY, BZ, CA, CC, CD,
    CF, CG, CH, CI, CK, CL, CM, CN, CO, CR,
    CU, CV, CW, CX, CY, CZ, DE, DJ, DK, DM,
    DO, DZ, EC, EE, EG, EH, ER, ES, ET, FI,
    FJ, FK, FM, FO, FR, GA, GB, GD, GE, GF,
    GG, GH, GI, GL, GM, GN, GP, GQ, GR, GS,
    GT, GU, GW, GY, HK, HM, HN, HR, HT, HU,
    ID, IE, IL, IM, IN, IO, IQ, IR, IS, IT,
    JE, JM, JO, JP, KE, KG, KH, KI, KM, KN,
    KP, KR, KW, KY, KZ, LA, LB, LC, LI, LK,
    LR, LS, LT, LU, LV, LY, MA, MC, MD, ME,
    MF, MG, MH, MK, ML, MM, MN, MO, MP, MQ,
    MR, MS, MT, MU, MV, MW, MX, MY, MZ, NA,
    NC, NE, NF, NG, NI, NL, NO, NP, NR, NU,
    NZ, OM, PA, PE, PF, PG, PH, PK, PL, PM,
    PN, PR, PS, PT, PW, PY, QA, RE, RO, RS,
    RU, RW, SA, SB, SC, SD, SE, SG, SH, SI,
    SJ, SK, SL, SM, SN, SO, SR, SS, ST, SV,
    SX, SY, SZ, TC, TD, TF, TG, TH, TJ, TK,
    TL, TM, TN, TO, TR, TT, TV, TW, TZ, UA,
    UG, UM, US, UY, UZ, VA, VC, VE, VG, VI,
    VN, VU, WF, WS, XK, YE, YT, ZA, ZM, ZW,
}

impl RegionCode {
    /// Flag emoji built from the two regional indicator symbols of the code.
    pub fn flag_emoji(&self) -> String {
        self.as_str()
            .chars()
            .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
            .collect()
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for RegionCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("fr".parse::<RegionCode>().unwrap(), RegionCode::FR);
        assert_eq!(" De ".parse::<RegionCode>().unwrap(), RegionCode::DE);
    }

    #[test]
    fn rejects_unknown_codes() {
        let err = "ZZ".parse::<RegionCode>().unwrap_err();
        assert!(matches!(err, PickerError::UnknownRegionCode(ref c) if c == "ZZ"));
    }

    #[test]
    fn all_codes_are_sorted_and_round_trip_through_as_str() {
        assert!(RegionCode::ALL.windows(2).all(|w| w[0].as_str() < w[1].as_str()));
        for code in RegionCode::ALL {
            assert_eq!(code.as_str().parse::<RegionCode>().unwrap(), *code);
        }
    }

    #[test]
    fn flag_emoji_uses_regional_indicators() {
        assert_eq!(RegionCode::FR.flag_emoji(), "\u{1F1EB}\u{1F1F7}");
        assert_eq!(RegionCode::DE.flag_emoji(), "🇩🇪");
    }
}
