//! Missions and file types available from the data service.

use std::fmt;
use strum::IntoEnumIterator;

/// Radio occultation missions with archives on the data service.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumString, IntoStaticStr, EnumIter, Hash)]
pub enum Mission {
    #[strum(to_string = "cosmic2013")]
    Cosmic2013,
    #[strum(to_string = "cosmic")]
    Cosmic,
    #[strum(to_string = "cosmicrt")]
    CosmicRt,
    #[strum(to_string = "grace")]
    Grace,
    #[strum(to_string = "champ2016")]
    Champ2016,
    #[strum(to_string = "gpsmet")]
    GpsMet,
    #[strum(to_string = "sacc")]
    Sacc,
    #[strum(to_string = "saccrt")]
    SaccRt,
    #[strum(to_string = "cnofs")]
    Cnofs,
    #[strum(to_string = "cnofsrt")]
    CnofsRt,
    #[strum(to_string = "gpsmetas")]
    GpsMetAs,
    #[strum(to_string = "kompsat5rt")]
    Kompsat5Rt,
    #[strum(to_string = "metopa2016")]
    MetopA2016,
    #[strum(to_string = "metopa")]
    MetopA,
    #[strum(to_string = "metopb2016")]
    MetopB2016,
    #[strum(to_string = "metopb")]
    MetopB,
    /// TerraSAR-X
    #[strum(to_string = "tsx")]
    Tsx,
}

/// Data products available for a mission.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumString, IntoStaticStr, EnumIter, Hash)]
pub enum FileType {
    #[strum(to_string = "opnGps")]
    OpnGps,
    #[strum(to_string = "podCrx")]
    PodCrx,
    /// LEO orbits
    #[strum(to_string = "leoOrb")]
    LeoOrb,
    #[strum(to_string = "leoClk")]
    LeoClk,
    #[strum(to_string = "leoAtt")]
    LeoAtt,
    #[strum(to_string = "comClk")]
    ComClk,
    #[strum(to_string = "atmPhs")]
    AtmPhs,
    #[strum(to_string = "gpsBit")]
    GpsBit,
    /// Atmospheric profiles
    #[strum(to_string = "atmPrf")]
    AtmPrf,
    /// Wet (1D-Var) retrievals
    #[strum(to_string = "wetPrf")]
    WetPrf,
    #[strum(to_string = "bfrPrf")]
    BfrPrf,
    /// Co-located radiosondes
    #[strum(to_string = "sonPrf")]
    SonPrf,
    #[strum(to_string = "ecmPrf")]
    EcmPrf,
    #[strum(to_string = "echPrf")]
    EchPrf,
    #[strum(to_string = "eraPrf")]
    EraPrf,
    #[strum(to_string = "gfsPrf")]
    GfsPrf,
    #[strum(to_string = "mmcGrd")]
    MmcGrd,
    /// Total electron content from precise orbit determination
    #[strum(to_string = "podTec")]
    PodTec,
    #[strum(to_string = "ionPhs")]
    IonPhs,
    /// Ionospheric electron density profiles
    #[strum(to_string = "ionPrf")]
    IonPrf,
    #[strum(to_string = "tipLv1")]
    TipLv1,
    #[strum(to_string = "scnLv1")]
    ScnLv1,
}

impl Mission {
    /// The code used in the catalog path.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// All valid mission codes, space separated.
    pub fn all_codes() -> String {
        join_codes(Mission::iter().map(Mission::code))
    }
}

impl FileType {
    /// The code used in the catalog path.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// All valid file type codes, space separated.
    pub fn all_codes() -> String {
        join_codes(FileType::iter().map(FileType::code))
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

fn join_codes(codes: impl Iterator<Item = &'static str>) -> String {
    codes.collect::<Vec<_>>().join(" ")
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
